/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! # crysgen
//!
//! A post-processing tool for CRYSTAL quantum-chemistry calculations.
//!
//! crysgen reads the line-oriented output report of a finished CRYSTAL run,
//! extracts the last reported crystal structure (lattice parameters and the
//! fractional coordinates of the asymmetric unit), determines the space group
//! of that structure, and writes a new d12-style input file for a follow-up
//! property calculation (SHG/CHI2 response, geometry optimization, or a plain
//! single-point run).
//!
//! The crate is split along the data flow:
//! - [`report`] scans the output report into a [`report::StructureRecord`],
//! - [`symmetry`] resolves the space-group number of the extracted structure,
//! - [`input`] serializes the structure plus the requested calculation
//!   parameters into the positional d12 format.

pub mod atoms;
pub mod cli;
pub mod input;
pub mod report;
pub mod symmetry;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
