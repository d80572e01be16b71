/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Basis-set handling
//!
//! A requested basis is either one of the builtin names CRYSTAL knows
//! directly (emitted as a BASISSET directive) or a custom set resolved
//! through a [`BasisLibrary`]: a text resource holding one fragment per
//! species, each introduced by a marker line of the form
//! `## New atom ... <species> ...`.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use super::errors::{GenerateError, Result};

/// Basis-set names CRYSTAL ships with; no library lookup needed
pub const BUILTIN_BASIS_SETS: &[&str] = &[
    "STO-3G",
    "STO-6G",
    "POB-DZVP",
    "POB-DZVP-REV2",
    "POB-DZVPP",
    "POB-TZVP",
    "POB-TZVP-REV2",
];

static BUILTIN_SET: Lazy<HashSet<String>> = Lazy::new(|| {
    BUILTIN_BASIS_SETS
        .iter()
        .map(|s| s.to_uppercase())
        .collect()
});

/// Whether a basis name refers to a builtin set, case-insensitively
pub fn is_builtin_basis(name: &str) -> bool {
    BUILTIN_SET.contains(&name.to_uppercase())
}

/// Prefix of the per-species marker lines inside a library resource
const SPECIES_MARKER: &str = "## New atom";

/// Source of custom basis-set text resources, keyed by basis name
pub trait BasisLibrary {
    /// Fetch the full text resource for a basis name
    fn fetch(&self, name: &str) -> Result<String>;
}

/// Basis library backed by a directory of `<name>.basis` files
#[derive(Debug, Clone)]
pub struct FileBasisLibrary {
    dir: PathBuf,
}

impl FileBasisLibrary {
    /// Create a library rooted at the given directory
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl BasisLibrary for FileBasisLibrary {
    fn fetch(&self, name: &str) -> Result<String> {
        let path = self.dir.join(format!("{}.basis", name));
        fs::read_to_string(&path).map_err(|e| GenerateError::BasisNotFound {
            name: path.display().to_string(),
            source: e,
        })
    }
}

/// Extract the fragment for one species from a library resource.
///
/// The fragment runs from the line after the species' marker to the next
/// marker (or the end of the resource), returned verbatim. `None` when the
/// resource has no marker for this species.
pub(super) fn species_fragment<'a>(resource: &'a str, species: &str) -> Option<Vec<&'a str>> {
    let mut lines = resource.lines();
    lines.by_ref().find(|line| {
        line.starts_with(SPECIES_MARKER) && line.split_whitespace().any(|t| t == species)
    })?;

    let fragment: Vec<&str> = lines
        .take_while(|line| !line.starts_with("##"))
        .collect();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOURCE: &str = "\
## New atom O 8
8 4
0 0 6 2.0 1.0
## New atom Si 14
14 5
0 0 8 2.0 1.0
0 1 6 8.0 1.0
";

    #[test]
    fn test_builtin_whitelist_case_insensitive() {
        assert!(is_builtin_basis("POB-DZVP-REV2"));
        assert!(is_builtin_basis("pob-dzvp-rev2"));
        assert!(is_builtin_basis("Sto-3g"));
        assert!(!is_builtin_basis("6-311Gs"));
    }

    #[test]
    fn test_species_fragment_found() {
        let fragment = species_fragment(RESOURCE, "8").unwrap();
        assert_eq!(fragment, vec!["8 4", "0 0 6 2.0 1.0"]);

        let fragment = species_fragment(RESOURCE, "14").unwrap();
        assert_eq!(fragment.len(), 3);
        assert_eq!(fragment[0], "14 5");
    }

    #[test]
    fn test_species_fragment_missing() {
        assert!(species_fragment(RESOURCE, "26").is_none());
        assert!(species_fragment("", "8").is_none());
    }
}
