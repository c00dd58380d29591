use std::collections::HashSet;

use crate::entities::{PartSpec, PartUnit, Sheet};
use crate::error::NestingError;

/// The static input of a nesting run: the parts to place and the sheet to place them on.
#[derive(Clone, Debug)]
pub struct Instance {
    pub parts: Vec<PartSpec>,
    pub sheet: Sheet,
}

impl Instance {
    pub fn new(parts: Vec<PartSpec>, sheet: Sheet) -> Result<Self, NestingError> {
        let mut seen = HashSet::new();
        if let Some(dup) = parts.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(NestingError::DuplicatePartId(dup.id.clone()));
        }
        Ok(Instance { parts, sheet })
    }

    pub fn part(&self, idx: usize) -> &PartSpec {
        &self.parts[idx]
    }

    /// Total number of part-units requested
    pub fn total_unit_qty(&self) -> usize {
        self.parts.iter().map(|p| p.quantity).sum()
    }

    /// All part-units, in input order
    pub fn part_units(&self) -> impl Iterator<Item = PartUnit> + '_ {
        self.parts
            .iter()
            .enumerate()
            .flat_map(|(idx, part)| part.units(idx))
    }
}
