/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! CRYSTAL d12 input generation
//!
//! Serializes an extracted [`StructureRecord`](crate::report::StructureRecord)
//! plus a [`GenerationRequest`] into the strict, positional d12 format:
//! title block, space group, non-degenerate lattice parameters, asymmetric
//! unit, optional calculation-kind block, basis set and DFT/SCF block, in
//! that order.

mod basis;
mod errors;
mod generator;
mod request;

pub use basis::{is_builtin_basis, BasisLibrary, FileBasisLibrary, BUILTIN_BASIS_SETS};
pub use errors::{GenerateError, Result};
pub use generator::InputGenerator;
pub use request::{CalculationKind, GenerationRequest};
