use std::time::Instant;

use crate::entities::{Bin, Instance, NestingResult, PlacedPart, Sheet, UnplacedPart};
use crate::io::ext_repr::{ExtBin, ExtPlacedPart, ExtSolution, ExtUnplacedPart};
use crate::metrics::{CostModel, cutting_path_length};

/// Exports a result out of the library.
/// `kerf_width` is needed to map the original outlines onto the sheet, `epoch` marks the start of the run.
pub fn export(
    instance: &Instance,
    result: &NestingResult,
    kerf_width: f64,
    cost_model: Option<&CostModel>,
    epoch: Instant,
) -> ExtSolution {
    ExtSolution {
        bins: result
            .bins
            .iter()
            .map(|bin| export_bin(instance, &instance.sheet, bin, kerf_width))
            .collect(),
        requested_units: result.requested_units,
        placed_units: result.placed_units,
        used_area: result.used_area,
        available_area: result.available_area,
        waste_area: result.waste_area,
        usage_percentage: result.usage_percentage,
        waste_percentage: result.waste_percentage,
        unplaced: result.unplaced.iter().map(|u| export_unplaced(instance, u)).collect(),
        cutting_path_length: cutting_path_length(result, instance),
        cost: cost_model.map(|cm| cm.estimate(result, instance)),
        run_time_sec: result.time_stamp.duration_since(epoch).as_secs_f64(),
    }
}

fn export_bin(instance: &Instance, sheet: &Sheet, bin: &Bin, kerf_width: f64) -> ExtBin {
    ExtBin {
        index: bin.index,
        usage: bin.usage(sheet),
        placed_parts: bin
            .placed_parts
            .iter()
            .map(|pp| export_placed_part(instance, pp, kerf_width))
            .collect(),
    }
}

fn export_placed_part(instance: &Instance, pp: &PlacedPart, kerf_width: f64) -> ExtPlacedPart {
    let part = instance.part(pp.part_idx());
    ExtPlacedPart {
        unit_id: pp.unit.id.clone(),
        part_id: part.id.clone(),
        rotation: pp.rotation,
        x: pp.x,
        y: pp.y,
        transformation: pp.transformation(part, kerf_width).into(),
    }
}

fn export_unplaced(instance: &Instance, unplaced: &UnplacedPart) -> ExtUnplacedPart {
    ExtUnplacedPart {
        unit_id: unplaced.unit.id.clone(),
        part_id: instance.part(unplaced.unit.part_idx).id.clone(),
        reason: unplaced.reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BinId, NestingProblem, PartSpec, Placement, UnplacedReason};
    use crate::geometry::geo_enums::RotationPolicy;
    use crate::geometry::primitives::{Point, Rect};
    use crate::util::SeparationConfig;

    #[test]
    fn export_maps_outline_into_footprint() {
        let epoch = Instant::now();
        // right triangle, not anchored at the origin
        let pts = vec![Point(10.0, 20.0), Point(110.0, 20.0), Point(10.0, 70.0)];
        let part = PartSpec::new("tri", pts, None, 2, RotationPolicy::FourWay).unwrap();
        let sheet = Sheet::new(500.0, 500.0).unwrap();
        let instance = Instance::new(vec![part], sheet).unwrap();
        let separation = SeparationConfig {
            kerf_width: 1.0,
            global_clearance: 0.0,
            common_line_cutting: false,
        };

        let mut prob = NestingProblem::new(instance.clone(), separation);
        let mut units = instance.part_units();
        prob.place_part(Placement {
            bin_id: BinId::New,
            unit: units.next().unwrap(),
            rotation: 90.0,
            footprint: Rect::from_origin(200.0, 0.0, 52.0, 102.0),
        });
        prob.reject_part(units.next().unwrap(), UnplacedReason::NoValidPosition);
        let result = prob.save();

        let ext = export(&instance, &result, 1.0, None, epoch);
        assert_eq!(ext.bins.len(), 1);
        assert_eq!(ext.placed_units, 1);
        assert!(ext.cost.is_none());
        assert!(ext.run_time_sec >= 0.0);

        let epp = &ext.bins[0].placed_parts[0];
        assert_eq!(epp.unit_id, "tri_0");
        assert_eq!(epp.part_id, "tri");
        assert_eq!(epp.rotation, 90.0);
        // rotated by 90°, the outline spans x in [-70, -20] and y in [10, 110]
        assert_eq!(epp.transformation.rotation, 90.0);
        assert_eq!(epp.transformation.translation, (271.0, -9.0));

        assert_eq!(ext.unplaced.len(), 1);
        assert_eq!(ext.unplaced[0].unit_id, "tri_1");
        assert_eq!(ext.unplaced[0].reason, UnplacedReason::NoValidPosition);
    }

    #[test]
    fn export_with_cost_model() {
        let epoch = Instant::now();
        let pts = Rect::from_origin(0.0, 0.0, 100.0, 100.0).corners().to_vec();
        let part = PartSpec::new("sq", pts, None, 1, RotationPolicy::Fixed).unwrap();
        let instance = Instance::new(vec![part], Sheet::new(1000.0, 1000.0).unwrap()).unwrap();

        let mut prob = NestingProblem::new(instance.clone(), SeparationConfig::none());
        let unit = instance.part_units().next().unwrap();
        prob.place_part(Placement {
            bin_id: BinId::New,
            unit,
            rotation: 0.0,
            footprint: Rect::from_origin(0.0, 0.0, 100.0, 100.0),
        });
        let result = prob.save();

        let cm = CostModel {
            cost_per_sheet: 100.0,
            cutting_cost_per_meter: 10.0,
        };
        let ext = export(&instance, &result, 0.0, Some(&cm), epoch);
        assert_eq!(ext.cutting_path_length, 400.0);
        let cost = ext.cost.unwrap();
        assert_eq!(cost.material_cost, 100.0);
        assert_eq!(cost.cutting_cost, 4.0);
        assert_eq!(cost.cost_per_part, Some(104.0));
        assert!(serde_json::to_string(&ext).is_ok());
    }
}
