/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Command Line Interface (CLI) module
//!
//! Argument surface and top-level orchestration: read the report, scan it,
//! resolve the space group, generate the new input file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::input::{FileBasisLibrary, GenerationRequest, InputGenerator};
use crate::report::parse_report_file;
use crate::symmetry::{MoyoResolver, SpaceGroupResolver};

/// Read a CRYSTAL output file and generate a new input file
#[derive(Parser, Debug)]
#[command(name = "crysgen")]
#[command(version)]
#[command(about = "Read a CRYSTAL output file and generate a new input file", long_about = None)]
pub struct Cli {
    /// The CRYSTAL output file to read
    pub report: PathBuf,

    /// Destination of the generated input file
    #[arg(short, long, default_value = "crystal.d12")]
    pub output: PathBuf,

    /// The type of calculation to set up (SHG, CHI2 or OPT)
    #[arg(short = 't', long = "kind")]
    pub kind: Option<String>,

    /// The wavelength of the light source (nm)
    #[arg(short, long)]
    pub wavelength: Option<f64>,

    /// The DFT exchange-correlation functional to use
    #[arg(short = 'x', long, default_value = "PBE0")]
    pub functional: String,

    /// The basis set to use (builtin keyword or basis-library name)
    #[arg(short, long, default_value = "POB-TZVP-REV2")]
    pub basis: String,

    /// The SHRINK parameter for the sampling of the first Brillouin zone
    #[arg(short, long, default_value_t = 4)]
    pub shrink: u32,

    /// The first three (identical) entries of the TOLINTEG parameter
    #[arg(long = "tolinteg1", default_value_t = 7)]
    pub tolinteg1: u32,

    /// The last two entries of the TOLINTEG parameter
    #[arg(long = "tolinteg2", num_args = 2, default_values_t = [18, 40])]
    pub tolinteg2: Vec<u32>,

    /// Directory holding custom basis-set resources
    #[arg(long, default_value = "basis_sets")]
    pub basis_dir: PathBuf,

    /// Distance tolerance for symmetry detection (Angstrom)
    #[arg(long, default_value_t = 1e-4)]
    pub symprec: f64,

    /// Print the extracted structure as JSON and exit
    #[arg(long)]
    pub dump_structure: bool,
}

/// Run the full pipeline for one report
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let record = parse_report_file(&cli.report)?;
    log::info!(
        "extracted {} conventional / {} asymmetric atoms from '{}'",
        record.conv_coords.len(),
        record.asym_atom_count(),
        cli.report.display()
    );

    if cli.dump_structure {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let resolver = MoyoResolver::new(cli.symprec);
    let space_group = resolver
        .resolve(&record.lattice, &record.atom_labels, &record.conv_coords)
        .context("space-group resolution failed")?;
    log::info!("resolved space group {}", space_group);

    let request = GenerationRequest {
        kind: cli.kind,
        wavelength: cli.wavelength,
        functional: cli.functional,
        basis: cli.basis,
        shrink: cli.shrink,
        tolinteg_head: cli.tolinteg1,
        tolinteg_tail: [cli.tolinteg2[0], cli.tolinteg2[1]],
    };
    let library = FileBasisLibrary::new(cli.basis_dir);

    InputGenerator::new(&record, space_group)
        .write_to_file(&cli.output, &request, &library)
        .with_context(|| format!("failed to generate '{}'", cli.output.display()))?;

    log::info!("wrote '{}'", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["crysgen", "slurm-983371.out"]);
        assert_eq!(cli.output, PathBuf::from("crystal.d12"));
        assert_eq!(cli.functional, "PBE0");
        assert_eq!(cli.basis, "POB-TZVP-REV2");
        assert_eq!(cli.shrink, 4);
        assert_eq!(cli.tolinteg1, 7);
        assert_eq!(cli.tolinteg2, vec![18, 40]);
        assert!(cli.kind.is_none());
        assert!(cli.wavelength.is_none());
    }

    #[test]
    fn test_cli_kind_and_wavelength() {
        let cli = Cli::parse_from([
            "crysgen",
            "out.log",
            "-t",
            "shg",
            "-w",
            "1907",
            "--tolinteg2",
            "20",
            "60",
        ]);
        assert_eq!(cli.kind.as_deref(), Some("shg"));
        assert_eq!(cli.wavelength, Some(1907.0));
        assert_eq!(cli.tolinteg2, vec![20, 60]);
    }
}
