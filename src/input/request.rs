/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Calculation parameters for input generation

use super::errors::{GenerateError, Result};

/// The calculation kinds that get a dedicated block in the generated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationKind {
    /// Second-harmonic generation (CPKS THIRD response)
    Shg,
    /// Second-order susceptibility (same CPKS THIRD response block)
    Chi2,
    /// Full geometry optimization
    Opt,
}

impl CalculationKind {
    /// Parse a kind string, case-insensitively.
    ///
    /// Anything outside the supported set is a hard error naming the
    /// offending string; there is no fallthrough.
    pub fn parse(kind: &str) -> Result<Self> {
        match kind.to_uppercase().as_str() {
            "SHG" => Ok(Self::Shg),
            "CHI2" => Ok(Self::Chi2),
            "OPT" => Ok(Self::Opt),
            _ => Err(GenerateError::UnsupportedKind(kind.to_string())),
        }
    }
}

/// User-chosen parameters controlling one generated input file.
///
/// `kind` stays the raw user string: the title block prints it as given
/// (uppercased) and the kind dispatch resolves it exactly once, so an
/// unsupported kind fails at its own section, after the structure sections
/// are already written.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Calculation kind; `None` means a plain single-point run
    pub kind: Option<String>,
    /// Light-source wavelength in nm, for dynamic response calculations
    pub wavelength: Option<f64>,
    /// DFT exchange-correlation functional
    pub functional: String,
    /// Basis-set name: a builtin keyword or a basis-library resource
    pub basis: String,
    /// SHRINK sampling density of the first Brillouin zone
    pub shrink: u32,
    /// First TOLINTEG value, applied to the three overlap tolerances
    pub tolinteg_head: u32,
    /// Last two TOLINTEG values
    pub tolinteg_tail: [u32; 2],
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            kind: None,
            wavelength: None,
            functional: "PBE0".to_string(),
            basis: "POB-TZVP-REV2".to_string(),
            shrink: 4,
            tolinteg_head: 7,
            tolinteg_tail: [18, 40],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!(CalculationKind::parse("shg").unwrap(), CalculationKind::Shg);
        assert_eq!(CalculationKind::parse("SHG").unwrap(), CalculationKind::Shg);
        assert_eq!(
            CalculationKind::parse("Chi2").unwrap(),
            CalculationKind::Chi2
        );
        assert_eq!(CalculationKind::parse("opt").unwrap(), CalculationKind::Opt);
    }

    #[test]
    fn test_parse_kind_rejects_unknown() {
        let err = CalculationKind::parse("foo").unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedKind(ref k) if k == "foo"));
    }
}
