use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::{Instance, NestingResult};
use crate::geometry::primitives::Point;

/// Height of the horizontal bands the cutting head is assumed to sweep, in sheet units.
pub const ROW_BAND: f64 = 10.0;

/// Millimeters per meter, sheet coordinates are assumed to be in millimeters.
const MM_PER_M: f64 = 1000.0;

/// Rough estimate of the total cutting path length of a result.
///
/// Per bin, the placed parts are visited row by row (bands of [`ROW_BAND`] on y, then by x).
/// The path is the travel between consecutive placement origins plus the perimeter of every placed outline.
pub fn cutting_path_length(result: &NestingResult, instance: &Instance) -> f64 {
    result
        .bins
        .iter()
        .map(|bin| {
            let visit_order = bin
                .placed_parts
                .iter()
                .sorted_by_key(|pp| (OrderedFloat((pp.y / ROW_BAND).floor()), OrderedFloat(pp.x)))
                .collect_vec();

            let travel: f64 = visit_order
                .iter()
                .tuple_windows()
                .map(|(a, b)| Point(a.x, a.y).distance(&Point(b.x, b.y)))
                .sum();

            let contours: f64 = visit_order
                .iter()
                .map(|pp| instance.part(pp.part_idx()).shape.perimeter())
                .sum();

            travel + contours
        })
        .sum()
}

/// Prices used to estimate the cost of a nesting result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Material cost of a single sheet
    pub cost_per_sheet: f64,
    /// Cost per meter of cutting path
    pub cutting_cost_per_meter: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub material_cost: f64,
    pub cutting_cost: f64,
    pub total_cost: f64,
    /// `None` if nothing was placed
    pub cost_per_part: Option<f64>,
    /// Share of the material cost spent on waste
    pub waste_cost: f64,
}

impl CostModel {
    pub fn estimate(&self, result: &NestingResult, instance: &Instance) -> CostEstimate {
        let material_cost = result.n_bins() as f64 * self.cost_per_sheet;
        let cutting_m = cutting_path_length(result, instance) / MM_PER_M;
        let cutting_cost = cutting_m * self.cutting_cost_per_meter;
        let total_cost = material_cost + cutting_cost;
        let cost_per_part = match result.placed_units {
            0 => None,
            n => Some(total_cost / n as f64),
        };
        CostEstimate {
            material_cost,
            cutting_cost,
            total_cost,
            cost_per_part,
            waste_cost: result.waste_percentage / 100.0 * material_cost,
        }
    }
}
