use crate::entities::{PlacedPart, Sheet};

/// One physical sheet's worth of placed parts.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    /// Assigned at creation, never reused
    pub index: usize,
    /// In placement order, not spatial order
    pub placed_parts: Vec<PlacedPart>,
}

impl Bin {
    pub fn new(index: usize) -> Self {
        Bin {
            index,
            placed_parts: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placed_parts.is_empty()
    }

    /// The sum of the areas of the parts placed in this bin.
    pub fn used_area(&self) -> f64 {
        self.placed_parts.iter().map(|pp| pp.area).sum()
    }

    /// Ratio of the placed area to the area of the sheet
    pub fn usage(&self, sheet: &Sheet) -> f64 {
        self.used_area() / sheet.area()
    }
}
