use crate::entities::{PlacedPart, Sheet};
use crate::geometry::primitives::Rect;
use crate::util::SeparationConfig;

/// A part-unit at a candidate rotation and position, as seen by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Rotated, kerf-expanded bounding box, translated to the candidate position
    pub footprint: Rect,
    pub min_spacing: Option<f64>,
}

/// The first reason a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conflict {
    /// The footprint is not contained in the sheet
    OutOfBounds,
    /// The footprint comes too close to the placed part at `index` (in the bin's placement order).
    /// `x_clear` is the smallest `x_min` at which the candidate is cleared from that part,
    /// regardless of its vertical position.
    Collision { index: usize, x_clear: f64 },
}

/// Checks containment first, then the pairwise clearance to every placed part in the bin, in placement order.
/// Returns the first conflict encountered, `None` if the candidate is valid.
pub fn first_conflict(
    candidate: &Candidate,
    existing: &[PlacedPart],
    sheet: &Sheet,
    config: &SeparationConfig,
) -> Option<Conflict> {
    if !candidate.footprint.contained_in(&sheet.rect()) {
        return Some(Conflict::OutOfBounds);
    }
    existing.iter().enumerate().find_map(|(index, other)| {
        let clearance = config.clearance_between(candidate.min_spacing, other.min_spacing);
        match candidate
            .footprint
            .overlaps_with_clearance(&other.footprint, clearance)
        {
            true => Some(Conflict::Collision {
                index,
                x_clear: other.footprint.x_max + clearance,
            }),
            false => None,
        }
    })
}

/// True if the candidate lies within the sheet and is separated from every placed part by the required clearance.
pub fn is_valid_placement(
    candidate: &Candidate,
    existing: &[PlacedPart],
    sheet: &Sheet,
    config: &SeparationConfig,
) -> bool {
    first_conflict(candidate, existing, sheet, config).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PartUnit;

    fn placed(footprint: Rect, min_spacing: Option<f64>) -> PlacedPart {
        PlacedPart {
            unit: PartUnit {
                id: "p_0".into(),
                part_idx: 0,
                unit_idx: 0,
            },
            bin_index: 0,
            rotation: 0.0,
            x: footprint.x_min,
            y: footprint.y_min,
            footprint,
            min_spacing,
            area: footprint.width() * footprint.height(),
        }
    }

    fn candidate(x: f64, y: f64, w: f64, h: f64) -> Candidate {
        Candidate {
            footprint: Rect::from_origin(x, y, w, h),
            min_spacing: None,
        }
    }

    fn config(clearance: f64) -> SeparationConfig {
        SeparationConfig {
            kerf_width: 0.0,
            global_clearance: clearance,
            common_line_cutting: false,
        }
    }

    #[test]
    fn containment() {
        let sheet = Sheet::new(100.0, 50.0).unwrap();
        let cfg = config(0.0);
        assert!(is_valid_placement(&candidate(0.0, 0.0, 100.0, 50.0), &[], &sheet, &cfg));
        assert_eq!(
            first_conflict(&candidate(60.0, 0.0, 50.0, 10.0), &[], &sheet, &cfg),
            Some(Conflict::OutOfBounds)
        );
        assert!(!is_valid_placement(&candidate(0.0, 45.0, 10.0, 10.0), &[], &sheet, &cfg));
    }

    #[test]
    fn clearance_against_placed_parts() {
        let sheet = Sheet::new(1000.0, 1000.0).unwrap();
        let cfg = config(10.0);
        let existing = [placed(Rect::from_origin(0.0, 0.0, 400.0, 400.0), None)];

        // exactly the clearance away is fine
        assert!(is_valid_placement(&candidate(410.0, 0.0, 400.0, 400.0), &existing, &sheet, &cfg));
        assert!(is_valid_placement(&candidate(0.0, 410.0, 400.0, 400.0), &existing, &sheet, &cfg));
        assert_eq!(
            first_conflict(&candidate(405.0, 0.0, 400.0, 400.0), &existing, &sheet, &cfg),
            Some(Conflict::Collision {
                index: 0,
                x_clear: 410.0
            })
        );
    }

    #[test]
    fn per_part_spacing_overrides_global_clearance() {
        let sheet = Sheet::new(1000.0, 1000.0).unwrap();
        let cfg = config(10.0);
        let existing = [placed(Rect::from_origin(0.0, 0.0, 100.0, 100.0), Some(25.0))];
        assert!(!is_valid_placement(&candidate(110.0, 0.0, 50.0, 50.0), &existing, &sheet, &cfg));
        assert!(is_valid_placement(&candidate(125.0, 0.0, 50.0, 50.0), &existing, &sheet, &cfg));

        let mut spaced = candidate(110.0, 0.0, 50.0, 50.0);
        spaced.min_spacing = Some(30.0);
        let existing = [placed(Rect::from_origin(0.0, 0.0, 100.0, 100.0), None)];
        assert_eq!(
            first_conflict(&spaced, &existing, &sheet, &cfg),
            Some(Conflict::Collision {
                index: 0,
                x_clear: 130.0
            })
        );
    }

    #[test]
    fn reports_first_colliding_part() {
        let sheet = Sheet::new(1000.0, 1000.0).unwrap();
        let cfg = config(0.0);
        let existing = [
            placed(Rect::from_origin(0.0, 0.0, 100.0, 100.0), None),
            placed(Rect::from_origin(100.0, 0.0, 100.0, 100.0), None),
        ];
        assert_eq!(
            first_conflict(&candidate(150.0, 50.0, 10.0, 10.0), &existing, &sheet, &cfg),
            Some(Conflict::Collision {
                index: 1,
                x_clear: 200.0
            })
        );
    }
}
