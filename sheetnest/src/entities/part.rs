use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Sheet;
use crate::error::NestingError;
use crate::geometry::geo_enums::RotationPolicy;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, SPolygon};

/// Maximum angular deviation (in degrees) between a grain-locked part and the sheet grain.
pub const GRAIN_TOLERANCE: f64 = 5.0;

/// Grain (fiber, rolling) direction of a part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrainConstraint {
    /// Grain angle in degrees, in the part's own frame
    pub angle: f64,
    /// If true, the part may only be placed with its grain aligned to the sheet grain
    pub locked: bool,
}

/// A part to be nested, as submitted to a run. Immutable once created.
#[derive(Clone, Debug)]
pub struct PartSpec {
    /// Unique within a nesting run
    pub id: String,
    /// Outline of the part in its local frame
    pub shape: Arc<SPolygon>,
    /// Area of the outline, used for ordering and usage metrics
    pub area: f64,
    /// Number of units requested
    pub quantity: usize,
    pub rotation: RotationPolicy,
    pub grain: Option<GrainConstraint>,
    /// Overrides the global clearance around this part when larger
    pub min_spacing: Option<f64>,
}

impl PartSpec {
    /// Creates a part from its outline.
    /// If `area` is `None`, the magnitude of the shoelace area of the outline is used.
    pub fn new(
        id: impl Into<String>,
        vertices: Vec<Point>,
        area: Option<f64>,
        quantity: usize,
        rotation: RotationPolicy,
    ) -> Result<Self, NestingError> {
        let id = id.into();
        let n_points = vertices.len();
        let shape = SPolygon::new(vertices).ok_or_else(|| NestingError::DegeneratePolygon {
            part_id: id.clone(),
            n_points,
        })?;
        if !shape.is_finite() {
            return Err(NestingError::NonFiniteCoordinate { part_id: id });
        }
        let area = area.unwrap_or_else(|| shape.area());
        if !(area.is_finite() && area >= 0.0) {
            return Err(NestingError::InvalidArea { part_id: id, area });
        }
        if quantity == 0 {
            return Err(NestingError::ZeroQuantity { part_id: id });
        }
        Ok(PartSpec {
            id,
            shape: Arc::new(shape),
            area,
            quantity,
            rotation,
            grain: None,
            min_spacing: None,
        })
    }

    pub fn with_grain(mut self, grain: GrainConstraint) -> Result<Self, NestingError> {
        if !grain.angle.is_finite() {
            return Err(NestingError::InvalidPartGrain {
                part_id: self.id,
                angle: grain.angle,
            });
        }
        self.grain = Some(grain);
        Ok(self)
    }

    pub fn with_min_spacing(mut self, spacing: f64) -> Result<Self, NestingError> {
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(NestingError::InvalidPartSpacing {
                part_id: self.id,
                spacing,
            });
        }
        self.min_spacing = Some(spacing);
        Ok(self)
    }

    /// True if a grain-locked part may be placed at `rotation` degrees: the rotation has to lie within
    /// [`GRAIN_TOLERANCE`] of the sheet grain, measured modulo 360.
    /// The part's own grain angle is carried as data only and does not enter the check.
    /// Parts without a lock, or sheets without a grain, allow every rotation.
    pub fn allows_rotation(&self, rotation: f64, sheet: &Sheet) -> bool {
        match (self.grain, sheet.grain_angle) {
            (Some(grain), Some(sheet_grain)) if grain.locked => {
                let diff = (rotation - sheet_grain).rem_euclid(360.0);
                diff <= GRAIN_TOLERANCE || diff >= 360.0 - GRAIN_TOLERANCE
            }
            _ => true,
        }
    }

    /// Expands the part into its `quantity` independent units
    pub fn units(&self, part_idx: usize) -> impl Iterator<Item = PartUnit> + '_ {
        (0..self.quantity).map(move |unit_idx| PartUnit {
            id: format!("{}_{}", self.id, unit_idx),
            part_idx,
            unit_idx,
        })
    }
}

/// One concrete instance of a [`PartSpec`] after quantity expansion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartUnit {
    /// Derived id: `<part id>_<unit index>`
    pub id: String,
    /// Index of the part in the [`Instance`](crate::entities::Instance)
    pub part_idx: usize,
    pub unit_idx: usize,
}
