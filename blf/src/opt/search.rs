use std::cmp::Reverse;

use itertools::Itertools;
use log::trace;
use ordered_float::OrderedFloat;
use sheetnest::entities::{Instance, PartSpec, PartUnit, PlacedPart, Sheet, UnplacedReason};
use sheetnest::geometry::primitives::Rect;
use sheetnest::placement::{Candidate, Conflict, first_conflict, footprint_dims};

use crate::config::BLFConfig;

/// Scans the bin for the bottom-left-most valid position of the part, trying its rotations in order.
/// Rows are scanned from the bottom up, each row from left to right. The first valid position is returned
/// as the rotation and the footprint translated to that position.
///
/// `eval_counter` is incremented for every position handed to the evaluator.
pub fn search(
    part: &PartSpec,
    existing: &[PlacedPart],
    sheet: &Sheet,
    config: &BLFConfig,
    eval_counter: &mut usize,
) -> Option<(f64, Rect)> {
    let mut budget = config.max_iterations.unwrap_or(usize::MAX);

    for rotation in allowed_rotations(part, sheet, config) {
        let Some(dims) = footprint_dims(&part.shape.vertices, rotation, config.separation.kerf_width)
        else {
            continue;
        };
        let scan = grid_scan(part, dims, existing, sheet, config, &mut budget);
        *eval_counter += scan.n_evals;
        if let Some(footprint) = scan.footprint {
            return Some((rotation, footprint));
        }
        if budget == 0 {
            trace!("iteration cap reached for part {}", part.id);
            return None;
        }
    }
    None
}

/// Rotations generated by the part's policy, filtered by its grain lock
pub fn allowed_rotations(part: &PartSpec, sheet: &Sheet, config: &BLFConfig) -> Vec<f64> {
    part.rotation
        .angles(config.rotation_step)
        .into_iter()
        .filter(|r| part.allows_rotation(*r, sheet))
        .collect_vec()
}

struct ScanResult {
    footprint: Option<Rect>,
    n_evals: usize,
}

fn grid_scan(
    part: &PartSpec,
    dims: Rect,
    existing: &[PlacedPart],
    sheet: &Sheet,
    config: &BLFConfig,
    budget: &mut usize,
) -> ScanResult {
    let step = config.position_step;
    let max_x = sheet.width - dims.width();
    let max_y = sheet.height - dims.height();
    let mut n_evals = 0;

    if max_x < 0.0 || max_y < 0.0 {
        return ScanResult {
            footprint: None,
            n_evals,
        };
    }

    let mut i = 0;
    while i as f64 * step <= max_y {
        let y = i as f64 * step;
        let mut j = 0;
        while j as f64 * step <= max_x {
            if *budget == 0 {
                return ScanResult {
                    footprint: None,
                    n_evals,
                };
            }
            *budget -= 1;
            n_evals += 1;

            let x = j as f64 * step;
            let candidate = Candidate {
                footprint: dims.moved_to(x, y),
                min_spacing: part.min_spacing,
            };
            match first_conflict(&candidate, existing, sheet, &config.separation) {
                None => {
                    return ScanResult {
                        footprint: Some(candidate.footprint),
                        n_evals,
                    };
                }
                Some(Conflict::Collision { x_clear, .. }) => {
                    // every column left of x_clear collides with the same part
                    let next = (x_clear / step).floor() as usize;
                    j = usize::max(next, j + 1);
                }
                Some(Conflict::OutOfBounds) => j += 1,
            }
        }
        i += 1;
    }
    ScanResult {
        footprint: None,
        n_evals,
    }
}

/// The order in which part-units are placed: descending area, ties broken by input order.
pub fn part_unit_order(instance: &Instance) -> Vec<PartUnit> {
    instance
        .part_units()
        .sorted_by_cached_key(|unit| Reverse(OrderedFloat(instance.part(unit.part_idx).area)))
        .collect_vec()
}

/// Determines why a part-unit cannot be placed, given that the search on an empty sheet came up empty.
pub fn diagnose(part: &PartSpec, sheet: &Sheet, config: &BLFConfig) -> UnplacedReason {
    let rotations = allowed_rotations(part, sheet, config);
    if rotations.is_empty() {
        return UnplacedReason::GrainLocked;
    }
    let fits = rotations.iter().any(|r| {
        footprint_dims(&part.shape.vertices, *r, config.separation.kerf_width)
            .is_some_and(|dims| dims.width() <= sheet.width && dims.height() <= sheet.height)
    });
    match fits {
        true => UnplacedReason::NoValidPosition,
        false => UnplacedReason::ExceedsSheet,
    }
}
