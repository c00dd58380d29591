use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle.
///Degenerate rectangles (zero width or height) are allowed, they arise from degenerate input polygons.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Rectangle with its bottom-left corner at `(x, y)`
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns a new rectangle with the same center but expanded by `d` in every direction.
    pub fn inflate(&self, d: f64) -> Self {
        Rect::new(
            self.x_min - d,
            self.y_min - d,
            self.x_max + d,
            self.y_max + d,
        )
    }

    /// Same rectangle, moved so its bottom-left corner lies at `(x, y)`
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Rect::from_origin(x, y, self.width(), self.height())
    }

    /// True if `self` lies entirely within `other` (touching the boundary is allowed)
    #[inline(always)]
    pub fn contained_in(&self, other: &Rect) -> bool {
        self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
    }

    /// Separating axis test for two rectangles which need to be at least `clearance` apart.
    /// They overlap only if their intervals, inflated by `clearance`, strictly overlap on both axes.
    #[inline(always)]
    pub fn overlaps_with_clearance(&self, other: &Rect, clearance: f64) -> bool {
        self.x_min < other.x_max + clearance
            && self.x_max + clearance > other.x_min
            && self.y_min < other.y_max + clearance
            && self.y_max + clearance > other.y_min
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}
