/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Line scanner for CRYSTAL output reports

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::errors::{ReportError, Result};
use super::record::StructureRecord;

/// Marker phrase that opens a lattice block
const LATTICE_MARKER: &str = "LATTICE PARAMETERS";
/// Delimiter token that closes a lattice block
const LATTICE_END: &str = "**";
/// Marker phrase that opens a coordinate block
const COORDS_MARKER: &str = "ATOMS IN THE ASYMMETRIC UNIT";
/// Legend line printed once at the end of every coordinate block
const COORDS_END: &str = "T = ATOM BELONGING TO THE ASYMMETRIC UNIT";

/// Which report section the scanner is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Idle,
    Lattice,
    Coords,
}

/// Scanner state folded over the report lines.
///
/// Re-entering a section resets its accumulators, so after the fold only the
/// last occurrence of each section survives. Geometry optimizations print the
/// structure after every step; the converged one is the last.
#[derive(Debug)]
struct Scanner {
    mode: ScanMode,
    record: StructureRecord,
}

impl Scanner {
    fn new() -> Self {
        Self {
            mode: ScanMode::Idle,
            record: StructureRecord::new(),
        }
    }

    /// Consume one report line. Marker checks take precedence over content
    /// rows, in the fixed order the report format implies.
    fn step(mut self, line: &str) -> Self {
        if line.contains(LATTICE_MARKER) {
            self.mode = ScanMode::Lattice;
        } else if line.contains(LATTICE_END) {
            if self.mode == ScanMode::Lattice {
                self.mode = ScanMode::Idle;
            }
        } else if self.mode == ScanMode::Lattice {
            self.scan_lattice_row(line);
        } else if line.contains(COORDS_MARKER) {
            self.mode = ScanMode::Coords;
            // Fresh accumulation for this block
            self.record.conv_coords.clear();
            self.record.atom_labels.clear();
            self.record.asym_coords.clear();
            self.record.atom_numbers.clear();
        } else if line.contains(COORDS_END) {
            self.mode = ScanMode::Idle;
        } else if self.mode == ScanMode::Coords {
            self.scan_atom_row(line);
        }
        self
    }

    /// A lattice row has exactly 6 whitespace tokens and a numeric first
    /// token. Each conforming row replaces the previous one.
    fn scan_lattice_row(&mut self, line: &str) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 6 || tokens[0].parse::<f64>().is_err() {
            return;
        }
        let values: std::result::Result<Vec<f64>, _> =
            tokens.iter().map(|t| t.parse::<f64>()).collect();
        if let Ok(values) = values {
            self.record.lattice = values;
        }
    }

    /// An atom row has exactly 7 tokens:
    /// index, asymmetric flag, atomic number, symbol, x, y, z.
    ///
    /// Every conforming row joins the conventional cell; rows flagged "T"
    /// also join the asymmetric unit, with the coordinates kept as text.
    fn scan_atom_row(&mut self, line: &str) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 7 {
            return;
        }
        let (x, y, z) = match (
            tokens[4].parse::<f64>(),
            tokens[5].parse::<f64>(),
            tokens[6].parse::<f64>(),
        ) {
            (Ok(x), Ok(y), Ok(z)) => (x, y, z),
            _ => return,
        };

        self.record.conv_coords.push([x, y, z]);
        self.record.atom_labels.push(tokens[3].to_string());

        if tokens[1] == "T" {
            self.record.asym_coords.push([
                tokens[4].to_string(),
                tokens[5].to_string(),
                tokens[6].to_string(),
            ]);
            self.record.atom_numbers.push(tokens[2].to_string());
        }
    }
}

/// Scanner for CRYSTAL output reports
#[derive(Debug, Default)]
pub struct ReportParser;

impl ReportParser {
    /// Create a new report parser
    pub fn new() -> Self {
        Self
    }

    /// Scan a sequence of report lines into a [`StructureRecord`].
    ///
    /// Never fails: the report format is not a strict machine format, so
    /// malformed rows are skipped and missing sections leave the
    /// corresponding fields empty.
    pub fn parse<I, S>(&self, lines: I) -> StructureRecord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(Scanner::new(), |scanner, line| scanner.step(line.as_ref()))
            .record
    }
}

/// Read a CRYSTAL output file and scan it into a [`StructureRecord`]
pub fn parse_report_file<P: AsRef<Path>>(path: P) -> Result<StructureRecord> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<_>>()
        .map_err(|e| ReportError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(ReportParser::new().parse(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_row_replaces_previous() {
        let lines = [
            " LATTICE PARAMETERS (ANGSTROMS AND DEGREES)",
            "   A      B      C     ALPHA  BETA   GAMMA",
            "   5.0    5.0    8.0   90.0   90.0   120.0",
            "   5.1    5.1    8.7   90.0   90.0   120.0",
            " *******************************************",
        ];
        let record = ReportParser::new().parse(lines);
        assert_eq!(record.lattice, vec![5.1, 5.1, 8.7, 90.0, 90.0, 120.0]);
    }

    #[test]
    fn test_non_numeric_rows_skipped() {
        let lines = [
            " LATTICE PARAMETERS",
            " A B C ALPHA BETA GAMMA",
            "",
            " *****",
        ];
        let record = ReportParser::new().parse(lines);
        assert!(record.lattice.is_empty());
    }

    #[test]
    fn test_atom_row_needs_seven_tokens() {
        let lines = [
            " ATOMS IN THE ASYMMETRIC UNIT   33 - ATOMS IN THE UNIT CELL:   66",
            "     1 T   8 O     1.0E-01  2.0E-01  3.0E-01",
            "     2 F  14 SI    4.0E-01  5.0E-01",
            " T = ATOM BELONGING TO THE ASYMMETRIC UNIT",
        ];
        let record = ReportParser::new().parse(lines);
        assert_eq!(record.conv_coords.len(), 1);
        assert_eq!(record.atom_labels, vec!["O"]);
        assert_eq!(record.atom_numbers, vec!["8"]);
    }

    #[test]
    fn test_asym_coords_keep_report_text() {
        let lines = [
            " ATOMS IN THE ASYMMETRIC UNIT",
            "     1 T   8 O    -3.333333333333E-01  3.333333333333E-01 -2.500000000000E-01",
            " T = ATOM BELONGING TO THE ASYMMETRIC UNIT",
        ];
        let record = ReportParser::new().parse(lines);
        assert_eq!(record.asym_coords[0][0], "-3.333333333333E-01");
        assert_eq!(record.conv_coords[0][2], -0.25);
    }
}
