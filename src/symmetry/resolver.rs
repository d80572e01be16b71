/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! moyo-backed space-group resolver

use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;
use nalgebra::{Matrix3, Vector3};

use super::{Result, SpaceGroupResolver, SymmetryError};
use crate::atoms::database::atomic_number_from_symbol;

/// Space-group resolver backed by the moyo symmetry-detection crate
#[derive(Debug, Clone, Copy)]
pub struct MoyoResolver {
    /// Distance tolerance for symmetry detection, in Angstrom
    symprec: f64,
}

impl MoyoResolver {
    /// Create a resolver with the given distance tolerance
    pub fn new(symprec: f64) -> Self {
        Self { symprec }
    }
}

impl Default for MoyoResolver {
    fn default() -> Self {
        Self { symprec: 1e-4 }
    }
}

impl SpaceGroupResolver for MoyoResolver {
    fn resolve(&self, lattice: &[f64], labels: &[String], coords: &[[f64; 3]]) -> Result<i32> {
        if lattice.len() != 6 {
            return Err(SymmetryError::InvalidLattice(lattice.len()));
        }
        if labels.is_empty() {
            return Err(SymmetryError::EmptyStructure);
        }
        if labels.len() != coords.len() {
            return Err(SymmetryError::MismatchedCoordinates {
                labels: labels.len(),
                coords: coords.len(),
            });
        }

        let basis = lattice_matrix(lattice)?;

        let mut positions = Vec::with_capacity(coords.len());
        let mut numbers = Vec::with_capacity(labels.len());
        for (label, coord) in labels.iter().zip(coords) {
            // Report coordinates are already fractional
            positions.push(Vector3::new(coord[0], coord[1], coord[2]));
            let z = atomic_number_from_symbol(label)
                .ok_or_else(|| SymmetryError::UnknownSpecies(label.clone()))?;
            numbers.push(z);
        }

        let cell = Cell::new(Lattice::new(basis), positions, numbers);
        let dataset = MoyoDataset::new(
            &cell,
            self.symprec,
            AngleTolerance::Default,
            Setting::Spglib,
            true,
        )
        .map_err(|e| SymmetryError::DetectionFailed(format!("{:?}", e)))?;

        Ok(dataset.number)
    }
}

/// Build the row-basis lattice matrix from the 6 cell parameters, with the
/// a-vector along x and the b-vector in the xy-plane.
fn lattice_matrix(lattice: &[f64]) -> Result<Matrix3<f64>> {
    let (a, b, c) = (lattice[0], lattice[1], lattice[2]);
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(SymmetryError::DegenerateCell);
    }

    let alpha = lattice[3].to_radians();
    let beta = lattice[4].to_radians();
    let gamma = lattice[5].to_radians();

    let cos_alpha = alpha.cos();
    let cos_beta = beta.cos();
    let cos_gamma = gamma.cos();
    let sin_gamma = gamma.sin();
    if sin_gamma.abs() < f64::EPSILON {
        return Err(SymmetryError::DegenerateCell);
    }

    let cx = c * cos_beta;
    let cy = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
    let cz_sq = c * c - cx * cx - cy * cy;
    if cz_sq <= 0.0 {
        return Err(SymmetryError::DegenerateCell);
    }

    Ok(Matrix3::new(
        a,
        0.0,
        0.0,
        b * cos_gamma,
        b * sin_gamma,
        0.0,
        cx,
        cy,
        cz_sq.sqrt(),
    ))
}
