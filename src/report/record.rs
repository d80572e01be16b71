/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Structure data extracted from one CRYSTAL output report

use serde::Serialize;

/// The crystal structure extracted from one output report.
///
/// Two index-parallel pairs are kept: the full conventional cell
/// (`conv_coords` / `atom_labels`) feeds the space-group resolver, while the
/// symmetry-reduced asymmetric unit (`asym_coords` / `atom_numbers`) is what
/// gets written into the next input file.
///
/// Conventional coordinates are parsed to `f64` because the resolver needs
/// numbers; asymmetric coordinates deliberately stay the report's original
/// text so emission does not round-trip them through a float format.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StructureRecord {
    /// Lattice parameters: 3 lengths (Angstrom) then 3 angles (degrees).
    /// Empty when the report contained no lattice block.
    pub lattice: Vec<f64>,
    /// Fractional coordinates of every atom in the conventional cell.
    pub conv_coords: Vec<[f64; 3]>,
    /// Species symbols, index-parallel to `conv_coords`.
    pub atom_labels: Vec<String>,
    /// Fractional coordinates of the asymmetric unit, as report text.
    pub asym_coords: Vec<[String; 3]>,
    /// Species identifiers (atomic-number tokens), index-parallel to
    /// `asym_coords`.
    pub atom_numbers: Vec<String>,
}

impl StructureRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a lattice block was found in the report
    pub fn has_lattice(&self) -> bool {
        self.lattice.len() == 6
    }

    /// Number of atoms in the asymmetric unit
    pub fn asym_atom_count(&self) -> usize {
        self.asym_coords.len()
    }

    /// Species identifiers of the asymmetric unit, deduplicated with the
    /// first-seen order preserved
    pub fn unique_species(&self) -> Vec<&str> {
        let mut species: Vec<&str> = Vec::new();
        for number in &self.atom_numbers {
            if !species.contains(&number.as_str()) {
                species.push(number);
            }
        }
        species
    }
}
