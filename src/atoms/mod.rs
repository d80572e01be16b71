/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Atomic data
//!
//! Element symbol / atomic number lookups used to translate the species
//! labels printed in CRYSTAL reports into the numeric identifiers the
//! symmetry backend and the basis-set library work with.

pub mod database;

pub use database::{atomic_number_from_symbol, element_symbol};
