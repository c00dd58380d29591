use crate::geometry::Transformation;
use crate::geometry::bounds;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// A closed polygon, the first point is not repeated at the end.
/// Assumed to be simple (non-self-intersecting), this is not validated.
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Set of points that form the polygon
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
}

impl SPolygon {
    /// Creates a polygon from its vertices. Returns `None` if fewer than 3 points are given.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let bbox = bounds(&vertices)?;
        Some(SPolygon { vertices, bbox })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area using the shoelace formula, positive for counter-clockwise winding
    pub fn signed_area(points: &[Point]) -> f64 {
        let n = points.len();
        let sigma: f64 = (0..n)
            .map(|i| {
                let Point(x_i, y_i) = points[i];
                let Point(x_j, y_j) = points[(i + 1) % n];
                x_i * y_j - x_j * y_i
            })
            .sum();
        0.5 * sigma
    }

    /// Total length of all edges, including the closing edge
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.vertices[i].distance(&self.vertices[(i + 1) % n]))
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.is_finite())
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = SPolygon::signed_area(&self.vertices);
        if area == 0.0 {
            return self.bbox.centroid();
        }
        let n = self.vertices.len();
        let (cx, cy) = (0..n).fold((0.0, 0.0), |(cx, cy), i| {
            let Point(x_i, y_i) = self.vertices[i];
            let Point(x_j, y_j) = self.vertices[(i + 1) % n];
            let cross = x_i * y_j - x_j * y_i;
            (cx + (x_i + x_j) * cross, cy + (y_i + y_j) * cross)
        });
        Point(cx / (6.0 * area), cy / (6.0 * area))
    }

    fn area(&self) -> f64 {
        SPolygon::signed_area(&self.vertices).abs()
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });
        self.bbox = bounds(&self.vertices).expect("polygon has at least 3 vertices");
        self
    }
}

impl From<Rect> for SPolygon {
    fn from(r: Rect) -> Self {
        SPolygon {
            vertices: r.corners().to_vec(),
            bbox: r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FPA;

    #[test]
    fn area_ignores_winding() {
        let ccw = vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 3.0)];
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert_eq!(SPolygon::signed_area(&ccw), 6.0);
        assert_eq!(SPolygon::signed_area(&cw), -6.0);
        assert_eq!(SPolygon::new(cw).unwrap().area(), 6.0);
    }

    #[test]
    fn too_few_points() {
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_none());
    }

    #[test]
    fn perimeter_and_centroid() {
        let poly = SPolygon::from(Rect::from_origin(0.0, 0.0, 4.0, 2.0));
        assert_eq!(poly.perimeter(), 12.0);
        assert_eq!(poly.centroid(), Point(2.0, 1.0));

        let triangle = SPolygon::new(vec![Point(0.0, 0.0), Point(3.0, 0.0), Point(0.0, 3.0)]).unwrap();
        assert_eq!(FPA(triangle.perimeter()), FPA(6.0 + 18.0_f64.sqrt()));
        assert_eq!(triangle.centroid(), Point(1.0, 1.0));
    }
}
