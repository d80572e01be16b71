/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Element symbol tables
//!
//! CRYSTAL reports print species labels in upper case ("SI", "O"), so the
//! reverse lookup is case-insensitive.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Element symbols indexed by atomic number - 1
static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Lower-cased symbol -> atomic number
static NUMBERS: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_lowercase(), i as i32 + 1))
        .collect()
});

/// Returns the element symbol for an atomic number
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if (1..=118).contains(&atomic_number) {
        Some(SYMBOLS[(atomic_number - 1) as usize])
    } else {
        None
    }
}

/// Returns the atomic number for an element symbol
///
/// Case-insensitive: "Si", "SI" and "si" all resolve to 14.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    NUMBERS.get(&symbol.trim().to_lowercase()).copied()
}
