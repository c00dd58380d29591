use crate::geometry::primitives::{Point, Rect};
use crate::geometry::rotated_bounds;

/// Dimensions of the rotated, kerf-expanded bounding box of an outline, anchored at the origin.
/// `None` for an empty outline.
pub fn footprint_dims(vertices: &[Point], rotation: f64, kerf_width: f64) -> Option<Rect> {
    let rb = rotated_bounds(vertices, rotation)?;
    Some(Rect::from_origin(
        0.0,
        0.0,
        rb.width() + 2.0 * kerf_width,
        rb.height() + 2.0 * kerf_width,
    ))
}
