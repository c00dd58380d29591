use crate::entities::PartUnit;
use crate::geometry::primitives::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinId {
    /// An already opened bin
    Open(usize),
    /// A bin which still needs to be opened
    New,
}

/// Encapsulates all required information to place a part-unit in a [`NestingProblem`](crate::entities::NestingProblem)
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Which bin to place the unit in
    pub bin_id: BinId,
    pub unit: PartUnit,
    /// Rotation about the origin, in degrees
    pub rotation: f64,
    /// The rotated, kerf-expanded bounding box, translated to its position on the sheet
    pub footprint: Rect,
}
