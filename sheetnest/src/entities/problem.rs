use std::time::Instant;

use crate::entities::{
    Bin, BinId, Instance, NestingResult, PartUnit, PlacedPart, Placement, UnplacedPart,
    UnplacedReason,
};
use crate::util::{SeparationConfig, assertions};

/// Dynamic counterpart of [`Instance`]: the bins opened so far and the units that could not be placed.
/// Bins are only ever appended, never removed.
#[derive(Clone, Debug)]
pub struct NestingProblem {
    pub instance: Instance,
    /// Spacing rules all placements in this problem adhere to
    pub separation: SeparationConfig,
    pub bins: Vec<Bin>,
    pub unplaced: Vec<UnplacedPart>,
}

impl NestingProblem {
    pub fn new(instance: Instance, separation: SeparationConfig) -> Self {
        Self {
            instance,
            separation,
            bins: vec![],
            unplaced: vec![],
        }
    }

    /// Places a part-unit according to the provided [`Placement`].
    /// Opens a new bin if requested. Returns the index of the bin the unit was placed in.
    pub fn place_part(&mut self, placement: Placement) -> usize {
        let bin_index = match placement.bin_id {
            BinId::Open(index) => index,
            BinId::New => self.open_bin(),
        };
        let part = self.instance.part(placement.unit.part_idx);
        let placed_part = PlacedPart {
            bin_index,
            rotation: placement.rotation,
            x: placement.footprint.x_min,
            y: placement.footprint.y_min,
            footprint: placement.footprint,
            min_spacing: part.min_spacing,
            area: part.area,
            unit: placement.unit,
        };
        self.bins[bin_index].placed_parts.push(placed_part);
        bin_index
    }

    /// Records a part-unit as terminally unplaced.
    pub fn reject_part(&mut self, unit: PartUnit, reason: UnplacedReason) {
        self.unplaced.push(UnplacedPart { unit, reason });
    }

    fn open_bin(&mut self) -> usize {
        let index = self.bins.len();
        self.bins.push(Bin::new(index));
        index
    }

    pub fn placed_qty(&self) -> usize {
        self.bins.iter().map(|b| b.placed_parts.len()).sum()
    }

    /// Sum of the areas of all placed part-units
    pub fn used_area(&self) -> f64 {
        self.bins.iter().map(|b| b.used_area()).sum()
    }

    /// Total area of all opened bins
    pub fn available_area(&self) -> f64 {
        self.bins.len() as f64 * self.instance.sheet.area()
    }

    /// Ratio of the used area to the available area, 0.0 if no bins are opened.
    pub fn usage(&self) -> f64 {
        match self.bins.is_empty() {
            true => 0.0,
            false => self.used_area() / self.available_area(),
        }
    }

    /// Creates a snapshot of the current state of the problem as a [`NestingResult`].
    pub fn save(&self) -> NestingResult {
        let used_area = self.used_area();
        let available_area = self.available_area();
        let waste_area = available_area - used_area;
        let (usage_percentage, waste_percentage) = match available_area > 0.0 {
            true => (
                used_area / available_area * 100.0,
                waste_area / available_area * 100.0,
            ),
            false => (0.0, 0.0),
        };

        let result = NestingResult {
            bins: self.bins.clone(),
            requested_units: self.instance.total_unit_qty(),
            placed_units: self.placed_qty(),
            used_area,
            available_area,
            waste_area,
            usage_percentage,
            waste_percentage,
            unplaced: self.unplaced.clone(),
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::result_is_feasible(
            &result,
            &self.instance.sheet,
            &self.separation
        ));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PartSpec, Sheet};
    use crate::geometry::geo_enums::RotationPolicy;
    use crate::geometry::primitives::{Point, Rect};

    fn problem() -> NestingProblem {
        let pts = vec![
            Point(0.0, 0.0),
            Point(10.0, 0.0),
            Point(10.0, 10.0),
            Point(0.0, 10.0),
        ];
        let part = PartSpec::new("sq", pts, None, 3, RotationPolicy::Fixed).unwrap();
        let sheet = Sheet::new(20.0, 10.0).unwrap();
        NestingProblem::new(
            Instance::new(vec![part], sheet).unwrap(),
            SeparationConfig::none(),
        )
    }

    #[test]
    fn new_bins_get_increasing_indices() {
        let mut prob = problem();
        let mut units = prob.instance.part_units().collect::<Vec<_>>().into_iter();
        let footprint = Rect::from_origin(0.0, 0.0, 10.0, 10.0);

        let first = Placement {
            bin_id: BinId::New,
            unit: units.next().unwrap(),
            rotation: 0.0,
            footprint,
        };
        assert_eq!(prob.place_part(first), 0);

        let second = Placement {
            bin_id: BinId::Open(0),
            unit: units.next().unwrap(),
            rotation: 0.0,
            footprint: footprint.moved_to(10.0, 0.0),
        };
        assert_eq!(prob.place_part(second), 0);

        let third = Placement {
            bin_id: BinId::New,
            unit: units.next().unwrap(),
            rotation: 0.0,
            footprint,
        };
        assert_eq!(prob.place_part(third), 1);

        let result = prob.save();
        assert_eq!(result.bins.len(), 2);
        assert_eq!(result.placed_units, 3);
        assert_eq!(result.used_area, 300.0);
        assert_eq!(result.available_area, 400.0);
        assert_eq!(result.usage_percentage, 75.0);
        assert_eq!(result.waste_percentage, 25.0);
        assert_eq!(result.bins[0].placed_parts[1].x, 10.0);
    }

    #[test]
    fn no_bins_means_zero_usage() {
        let mut prob = problem();
        let unit = prob.instance.part_units().next().unwrap();
        prob.reject_part(unit, UnplacedReason::ExceedsSheet);
        let result = prob.save();
        assert!(result.bins.is_empty());
        assert_eq!(result.usage_percentage, 0.0);
        assert_eq!(result.waste_percentage, 0.0);
        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.requested_units, 3);
    }
}
