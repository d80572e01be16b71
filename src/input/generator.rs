/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! d12 section emitter

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::basis::{is_builtin_basis, species_fragment, BasisLibrary};
use super::errors::Result;
use super::request::{CalculationKind, GenerationRequest};
use crate::atoms::element_symbol;
use crate::report::StructureRecord;

/// Title used when no calculation kind is requested
const DEFAULT_TITLE: &str = "GENERATED CRYSTAL INPUT";
/// Iteration cap written into the CPKS and SCF blocks
const MAX_CYCLES: u32 = 100;

/// Emits a d12 input file from an extracted structure.
///
/// Sections are written in the fixed order the format requires: title,
/// space group, lattice, asymmetric unit, calculation-kind block, basis set,
/// DFT/SCF block. The emitter writes into any [`Write`] sink; the caller
/// owns the sink, so content written before a hard error is preserved.
#[derive(Debug)]
pub struct InputGenerator<'a> {
    record: &'a StructureRecord,
    space_group: i32,
}

impl<'a> InputGenerator<'a> {
    /// Create a generator for one structure and its space group
    pub fn new(record: &'a StructureRecord, space_group: i32) -> Self {
        Self {
            record,
            space_group,
        }
    }

    /// Write the complete input to a sink
    pub fn write<W: Write>(
        &self,
        w: &mut W,
        request: &GenerationRequest,
        library: &dyn BasisLibrary,
    ) -> Result<()> {
        self.write_header(w, request)?;
        self.write_space_group(w)?;
        self.write_lattice(w)?;
        self.write_coordinates(w)?;
        self.write_kind_block(w, request)?;
        self.write_basis_set(w, request, library)?;
        self.write_dft_block(w, request)?;
        Ok(())
    }

    /// Write the complete input to a file.
    ///
    /// The sink is flushed on every exit path, so a hard error mid-document
    /// (unsupported kind) leaves a truncated but intact file behind.
    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        request: &GenerationRequest,
        library: &dyn BasisLibrary,
    ) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        let result = self.write(&mut writer, request, library);
        writer.flush()?;
        result
    }

    fn write_header<W: Write>(&self, w: &mut W, request: &GenerationRequest) -> Result<()> {
        match &request.kind {
            Some(kind) => writeln!(w, "{}", kind.to_uppercase())?,
            None => writeln!(w, "{}", DEFAULT_TITLE)?,
        }
        writeln!(w, "CRYSTAL")?;
        writeln!(w, "0 0 0")?;
        Ok(())
    }

    fn write_space_group<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{}", self.space_group)?;
        Ok(())
    }

    /// Lattice parameters on one line, with the angles the space group
    /// already fixes (90 and 120 degrees) left out, as the format expects.
    fn write_lattice<W: Write>(&self, w: &mut W) -> Result<()> {
        let values: Vec<String> = self
            .record
            .lattice
            .iter()
            .filter(|&&v| v != 90.0 && v != 120.0)
            .map(|v| v.to_string())
            .collect();
        writeln!(w, "{}", values.join(" "))?;
        Ok(())
    }

    /// Asymmetric unit: count line, then one row per atom. Coordinates are
    /// emitted exactly as the report printed them.
    fn write_coordinates<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{}", self.record.asym_atom_count())?;
        for (number, coord) in self
            .record
            .atom_numbers
            .iter()
            .zip(&self.record.asym_coords)
        {
            writeln!(
                w,
                "{:<4} {:>20} {:>20} {:>20}",
                number, coord[0], coord[1], coord[2]
            )?;
        }
        Ok(())
    }

    /// Block for the requested calculation kind. The kind string is resolved
    /// exactly once here; an unsupported kind aborts the document with the
    /// structure sections already in the sink.
    fn write_kind_block<W: Write>(&self, w: &mut W, request: &GenerationRequest) -> Result<()> {
        let kind = match &request.kind {
            Some(kind) => CalculationKind::parse(kind)?,
            // Plain single-point run, no block
            None => return Ok(()),
        };

        match kind {
            CalculationKind::Shg | CalculationKind::Chi2 => {
                writeln!(w, "CPKS")?;
                writeln!(w, "THIRD")?;
                if let Some(wavelength) = request.wavelength {
                    writeln!(w, "DYNAMIC")?;
                    writeln!(w, "1")?;
                    writeln!(w, "{}", wavelength)?;
                }
                writeln!(w, "MAXCYCLE")?;
                writeln!(w, "{}", MAX_CYCLES)?;
                writeln!(w, "END")?;
            }
            CalculationKind::Opt => {
                writeln!(w, "OPTGEOM")?;
                writeln!(w, "FULLOPTG")?;
                writeln!(w, "ENDOPT")?;
            }
        }
        Ok(())
    }

    /// Basis-set section. Builtin names become a BASISSET directive; anything
    /// else closes the geometry block and splices the per-species fragments
    /// from the library resource, terminated by the `99 0` / `ENDBS` pair.
    /// A missing resource is reported and skipped, not fatal.
    fn write_basis_set<W: Write>(
        &self,
        w: &mut W,
        request: &GenerationRequest,
        library: &dyn BasisLibrary,
    ) -> Result<()> {
        if is_builtin_basis(&request.basis) {
            writeln!(w, "BASISSET")?;
            writeln!(w, "{}", request.basis.to_uppercase())?;
            return Ok(());
        }

        writeln!(w, "END")?;
        let resource = match library.fetch(&request.basis) {
            Ok(resource) => resource,
            Err(e) => {
                log::warn!("skipping basis section: {}", e);
                return Ok(());
            }
        };

        for species in self.record.unique_species() {
            match species_fragment(&resource, species) {
                Some(fragment) => {
                    for line in fragment {
                        writeln!(w, "{}", line)?;
                    }
                }
                None => {
                    let symbol = species
                        .parse::<i32>()
                        .ok()
                        .and_then(element_symbol)
                        .unwrap_or("?");
                    log::warn!(
                        "basis set '{}' has no entry for species {} ({})",
                        request.basis,
                        species,
                        symbol
                    );
                }
            }
        }
        writeln!(w, "99 0")?;
        writeln!(w, "ENDBS")?;
        Ok(())
    }

    fn write_dft_block<W: Write>(&self, w: &mut W, request: &GenerationRequest) -> Result<()> {
        writeln!(w, "DFT")?;
        writeln!(w, "{}", request.functional)?;
        writeln!(w, "END")?;
        writeln!(w, "TOLINTEG")?;
        writeln!(
            w,
            "{} {} {} {} {}",
            request.tolinteg_head,
            request.tolinteg_head,
            request.tolinteg_head,
            request.tolinteg_tail[0],
            request.tolinteg_tail[1]
        )?;
        writeln!(w, "SHRINK")?;
        writeln!(w, "{} {}", request.shrink, request.shrink)?;
        writeln!(w, "MAXCYCLE")?;
        writeln!(w, "{}", MAX_CYCLES)?;
        writeln!(w, "END")?;
        Ok(())
    }
}
