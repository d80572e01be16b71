/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Space-group resolution
//!
//! The input generator only needs one number from symmetry analysis: the
//! space group (1-230) of the extracted structure. [`SpaceGroupResolver`] is
//! the seam for that dependency; [`MoyoResolver`] is the bundled backend
//! built on the moyo symmetry-detection crate.

mod resolver;

pub use resolver::MoyoResolver;

use thiserror::Error;

/// Errors that can occur during space-group resolution
#[derive(Error, Debug)]
pub enum SymmetryError {
    #[error("invalid lattice: expected 6 parameters (3 lengths, 3 angles), got {0}")]
    InvalidLattice(usize),

    #[error("degenerate cell: lattice parameters do not span a 3D lattice")]
    DegenerateCell,

    #[error("unknown species label: {0}")]
    UnknownSpecies(String),

    #[error("structure contains no atoms")]
    EmptyStructure,

    #[error("species list has {labels} entries but coordinate list has {coords}")]
    MismatchedCoordinates { labels: usize, coords: usize },

    #[error("symmetry detection failed: {0}")]
    DetectionFailed(String),
}

/// Result type for symmetry operations
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Resolves the space-group number of a fully specified structure.
///
/// `lattice` holds the 6 cell parameters (lengths in Angstrom, angles in
/// degrees), `labels` the species symbol of every atom in the conventional
/// cell, `coords` the matching fractional coordinates.
pub trait SpaceGroupResolver {
    fn resolve(&self, lattice: &[f64], labels: &[String], coords: &[[f64; 3]]) -> Result<i32>;
}
