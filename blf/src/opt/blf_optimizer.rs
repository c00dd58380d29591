use std::time::Instant;

use log::{debug, info, warn};
use sheetnest::entities::{
    BinId, Instance, NestingProblem, NestingResult, PartSpec, PartUnit, PlacedPart, Placement,
};
use sheetnest::error::NestingError;
use thousands::Separable;

use crate::config::BLFConfig;
use crate::opt::search::{diagnose, part_unit_order, search};

/// Bottom-Left-Fill (BLF) optimizer for sheet nesting.
/// Part-units are placed one by one, largest first, each at the lowest then leftmost valid grid position
/// of the first bin that can take it. A new bin is only opened for a part-unit that fits an empty sheet.
pub struct BLFOptimizer {
    pub instance: Instance,
    pub problem: NestingProblem,
    pub config: BLFConfig,
    pub eval_counter: usize,
}

impl BLFOptimizer {
    pub fn new(instance: Instance, config: BLFConfig) -> Result<Self, NestingError> {
        config.validate()?;
        let problem = NestingProblem::new(instance.clone(), config.separation);
        Ok(Self {
            instance,
            problem,
            config,
            eval_counter: 0,
        })
    }

    /// Runs the heuristic from empty bins. Unplaceable part-units are recorded, never fatal.
    pub fn solve(&mut self) -> NestingResult {
        let start = Instant::now();
        self.problem = NestingProblem::new(self.instance.clone(), self.config.separation);
        self.eval_counter = 0;

        let n_units = self.instance.total_unit_qty();

        for unit in part_unit_order(&self.instance) {
            let part = self.instance.part(unit.part_idx);
            match search_bins(&self.problem, part, &unit, &self.config, &mut self.eval_counter) {
                Some(placement) => {
                    let (rotation, x, y) = (
                        placement.rotation,
                        placement.footprint.x_min,
                        placement.footprint.y_min,
                    );
                    let unit_id = placement.unit.id.clone();
                    let bin_index = self.problem.place_part(placement);
                    info!(
                        "[BLF] placing part-unit {}/{} with id {} at ({x}, {y}) rotated {rotation}° in bin {bin_index}",
                        self.problem.placed_qty(),
                        n_units,
                        unit_id,
                    );
                }
                None => {
                    let reason = diagnose(part, &self.instance.sheet, &self.config);
                    warn!("[BLF] part-unit {} could not be placed: {reason}", unit.id);
                    self.problem.reject_part(unit, reason);
                }
            }
        }

        let result = self.problem.save();

        info!(
            "[BLF] optimization finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.eval_counter.separate_with_commas()
        );
        info!(
            "[BLF] {}/{} part-units placed in {} bin(s) with a usage of {:.3}%",
            result.placed_units,
            result.requested_units,
            result.n_bins(),
            result.usage_percentage
        );

        result
    }
}

fn search_bins(
    problem: &NestingProblem,
    part: &PartSpec,
    unit: &PartUnit,
    config: &BLFConfig,
    eval_counter: &mut usize,
) -> Option<Placement> {
    let sheet = &problem.instance.sheet;
    //opened bins first, in creation order, then a fresh sheet
    let open_bins = problem
        .bins
        .iter()
        .map(|bin| (BinId::Open(bin.index), bin.placed_parts.as_slice()));
    let new_bin = std::iter::once((BinId::New, &[] as &[PlacedPart]));

    for (bin_id, existing) in open_bins.chain(new_bin) {
        debug!("searching {bin_id:?} for part-unit {}", unit.id);
        if let Some((rotation, footprint)) = search(part, existing, sheet, config, eval_counter) {
            return Some(Placement {
                bin_id,
                unit: unit.clone(),
                rotation,
                footprint,
            });
        }
    }
    None
}
