use crate::geometry::primitives::{Point, Rect};

/// Axis-aligned bounding box of a sequence of points. `None` for an empty sequence.
pub fn bounds(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let init = (first.0, first.1, first.0, first.1);
    let (x_min, y_min, x_max, y_max) =
        rest.iter()
            .fold(init, |(x_min, y_min, x_max, y_max), &Point(x, y)| {
                (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
            });
    Some(Rect::new(x_min, y_min, x_max, y_max))
}

/// Rotates every point counter-clockwise about the origin `(0, 0)`, not about the centroid.
pub fn rotate(points: &[Point], angle: f64) -> Vec<Point> {
    let (sin, cos) = sin_cos_deg(angle);
    points
        .iter()
        .map(|&Point(x, y)| Point(x * cos - y * sin, x * sin + y * cos))
        .collect()
}

/// Bounding box of the points after rotating them about the origin.
pub fn rotated_bounds(points: &[Point], angle: f64) -> Option<Rect> {
    bounds(&rotate(points, angle))
}

/// Sine and cosine of an angle in degrees.
/// Quarter turns are exact, so that rotating by 90 degrees swaps width and height without rounding noise.
pub fn sin_cos_deg(angle: f64) -> (f64, f64) {
    let normalized = angle.rem_euclid(360.0);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        angle.to_radians().sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;

    fn l_shape() -> Vec<Point> {
        vec![
            Point(0.0, 0.0),
            Point(30.0, 0.0),
            Point(30.0, 10.0),
            Point(10.0, 10.0),
            Point(10.0, 20.0),
            Point(0.0, 20.0),
        ]
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(bounds(&l_shape()), Some(Rect::new(0.0, 0.0, 30.0, 20.0)));
        assert_eq!(bounds(&[]), None);
        assert_eq!(
            bounds(&[Point(3.0, -2.0)]),
            Some(Rect::new(3.0, -2.0, 3.0, -2.0))
        );
    }

    #[test]
    fn rotation_is_about_the_origin() {
        let rotated = rotate(&[Point(10.0, 0.0)], 90.0);
        assert_eq!(rotated, vec![Point(0.0, 10.0)]);

        // the bbox does not stay anchored at the origin
        let bbox = rotated_bounds(&l_shape(), 180.0).unwrap();
        assert_eq!(bbox, Rect::new(-30.0, -20.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turns_swap_dimensions_exactly() {
        for angle in [90.0, 270.0, -90.0, 450.0] {
            let bbox = rotated_bounds(&l_shape(), angle).unwrap();
            assert_eq!(bbox.width(), 20.0);
            assert_eq!(bbox.height(), 30.0);
        }
    }

    #[test]
    fn arbitrary_rotation() {
        let square = [
            Point(0.0, 0.0),
            Point(10.0, 0.0),
            Point(10.0, 10.0),
            Point(0.0, 10.0),
        ];
        let bbox = rotated_bounds(&square, 45.0).unwrap();
        let diag = 10.0 * 2.0_f64.sqrt();
        assert_eq!(FPA(bbox.width()), FPA(diag));
        assert_eq!(FPA(bbox.height()), FPA(diag));
        assert_eq!(FPA(bbox.x_min), FPA(-diag / 2.0));
    }
}
