/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! CRYSTAL output-report scanning
//!
//! The output of a CRYSTAL run is a loosely structured, line-oriented report.
//! This module scans it for the "LATTICE PARAMETERS" and "ATOMS IN THE
//! ASYMMETRIC UNIT" sections and collects them into a [`StructureRecord`].
//! When a section appears more than once (geometry optimizations print the
//! structure after every step), only the last occurrence is kept.

mod errors;
mod parser;
mod record;

pub use errors::{ReportError, Result};
pub use parser::{parse_report_file, ReportParser};
pub use record::StructureRecord;
