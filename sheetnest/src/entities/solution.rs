use std::fmt::Display;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::entities::{Bin, PartUnit, PlacedPart};

/// Why a part-unit could not be placed in any bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// The grain lock forbids every rotation the policy allows
    GrainLocked,
    /// None of the allowed rotations fit the dimensions of an empty sheet
    ExceedsSheet,
    /// The footprint fits dimensionally, but no grid position on an empty sheet was accepted
    NoValidPosition,
}

impl Display for UnplacedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnplacedReason::GrainLocked => "grain lock forbids all rotations",
            UnplacedReason::ExceedsSheet => "exceeds the sheet in every rotation",
            UnplacedReason::NoValidPosition => "no valid grid position on an empty sheet",
        };
        f.write_str(s)
    }
}

/// A part-unit that ended up in the terminal `Unplaced` state.
#[derive(Clone, Debug, PartialEq)]
pub struct UnplacedPart {
    pub unit: PartUnit,
    pub reason: UnplacedReason,
}

/// Outcome of a completed nesting run. Percentages are relative to the total area of all opened bins.
#[derive(Clone, Debug)]
pub struct NestingResult {
    pub bins: Vec<Bin>,
    pub requested_units: usize,
    pub placed_units: usize,
    pub used_area: f64,
    pub available_area: f64,
    pub waste_area: f64,
    pub usage_percentage: f64,
    pub waste_percentage: f64,
    pub unplaced: Vec<UnplacedPart>,
    /// Instant at which the result was created
    pub time_stamp: Instant,
}

impl NestingResult {
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// All placed parts, bin by bin, in placement order
    pub fn placed_parts(&self) -> impl Iterator<Item = &PlacedPart> {
        self.bins.iter().flat_map(|b| b.placed_parts.iter())
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}
