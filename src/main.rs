/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Main executable for crysgen

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = crysgen::cli::Cli::parse();
    crysgen::cli::run(cli)
}
