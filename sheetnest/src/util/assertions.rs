use itertools::Itertools;
use log::error;

use crate::entities::{Bin, NestingResult, Sheet};
use crate::util::{FPA, SeparationConfig};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and in tests

/// Checks every placement law post-hoc over a full result:
/// containment, pairwise clearance, consistent bin indices and area bookkeeping.
pub fn result_is_feasible(
    result: &NestingResult,
    sheet: &Sheet,
    separation: &SeparationConfig,
) -> bool {
    result
        .bins
        .iter()
        .enumerate()
        .all(|(i, bin)| bin.index == i && bin_is_feasible(bin, sheet, separation))
        && result.bins.iter().all(|bin| !bin.is_empty())
        && placed_area_within_available(result)
        && result.placed_units + result.unplaced.len() <= result.requested_units
}

pub fn bin_is_feasible(bin: &Bin, sheet: &Sheet, separation: &SeparationConfig) -> bool {
    let sheet_rect = sheet.rect();
    for pp in &bin.placed_parts {
        if pp.bin_index != bin.index || !pp.footprint.contained_in(&sheet_rect) {
            error!(
                "part-unit {} lies outside of bin {}: {:?}",
                pp.unit.id, bin.index, pp.footprint
            );
            return false;
        }
    }
    for (a, b) in bin.placed_parts.iter().tuple_combinations() {
        let clearance = separation.clearance_between(a.min_spacing, b.min_spacing);
        if a.footprint.overlaps_with_clearance(&b.footprint, clearance) {
            error!(
                "part-units {} and {} in bin {} are closer than {clearance}",
                a.unit.id, b.unit.id, bin.index
            );
            return false;
        }
    }
    true
}

pub fn placed_area_within_available(result: &NestingResult) -> bool {
    let placed: f64 = result.placed_parts().map(|pp| pp.area).sum();
    FPA(placed) == FPA(result.used_area) && FPA(placed) <= FPA(result.available_area)
}
