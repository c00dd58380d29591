use crate::entities::{PartSpec, PartUnit};
use crate::geometry::DTransformation;
use crate::geometry::primitives::Rect;
use crate::geometry::rotated_bounds;

/// A part-unit that has been placed in a [`Bin`](crate::entities::Bin).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPart {
    pub unit: PartUnit,
    /// Index of the bin the unit was placed in
    pub bin_index: usize,
    /// Rotation about the origin, in degrees
    pub rotation: f64,
    /// Translation of the bottom-left corner of the kerf-expanded bounding box
    pub x: f64,
    pub y: f64,
    /// The rotated, kerf-expanded bounding box of the part at `(x, y)`
    pub footprint: Rect,
    /// Minimum spacing override of the part
    pub min_spacing: Option<f64>,
    /// Area of the part's outline
    pub area: f64,
}

impl PlacedPart {
    pub fn part_idx(&self) -> usize {
        self.unit.part_idx
    }

    /// The transformation that maps the original outline of `part` onto the sheet:
    /// a rotation about the origin followed by a translation which puts the rotated outline
    /// inside the footprint, `kerf_width` away from its bottom-left corner.
    ///
    /// # Panics
    /// If `part` has no vertices. Parts created through [`PartSpec::new`] always have at least 3,
    /// so this only happens when `part` is assembled by hand.
    pub fn transformation(&self, part: &PartSpec, kerf_width: f64) -> DTransformation {
        let rb = rotated_bounds(&part.shape.vertices, self.rotation)
            .expect("part outline has no vertices");
        let tx = self.x + kerf_width - rb.x_min;
        let ty = self.y + kerf_width - rb.y_min;
        DTransformation::new(self.rotation, (tx, ty))
    }
}
