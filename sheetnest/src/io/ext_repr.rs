use serde::{Deserialize, Serialize};

use crate::entities::{GrainConstraint, UnplacedReason};
use crate::geometry::DTransformation;
use crate::geometry::geo_enums::RotationPolicy;
use crate::metrics::{CostEstimate, CostModel};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub sheet: ExtSheet,
    pub parts: Vec<ExtPart>,
    /// Optional prices to estimate the cost of a solution
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost_model: Option<CostModel>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
    /// Grain direction of the material in degrees
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grain_angle: Option<f64>,
}

/// External representation of a [`PartSpec`](crate::entities::PartSpec).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Unique identifier of the part
    pub id: String,
    /// Number of units requested
    pub quantity: u64,
    /// Rotations the part may be placed in, free rotation if not specified
    #[serde(default)]
    pub rotation: RotationPolicy,
    pub shape: ExtShape,
    /// Area of the part, computed from the shape if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grain: Option<GrainConstraint>,
    /// Minimum spacing around this part, overrides the global clearance when larger
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_spacing: Option<f64>,
}

/// Various ways to represent the outline of a part
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle. With its left bottom corner at (x_min, y_min), a width and height
    Rectangle {
        x_min: f64,
        y_min: f64,
        width: f64,
        height: f64,
    },
    /// Polygon with a single outer boundary
    SimplePolygon(ExtSPolygon),
}

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
/// The first point is not repeated at the end.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSPolygon(pub Vec<(f64, f64)>);

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub bins: Vec<ExtBin>,
    pub requested_units: usize,
    pub placed_units: usize,
    pub used_area: f64,
    pub available_area: f64,
    pub waste_area: f64,
    pub usage_percentage: f64,
    pub waste_percentage: f64,
    pub unplaced: Vec<ExtUnplacedPart>,
    /// Estimated length of the cutting path over all bins
    pub cutting_path_length: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost: Option<CostEstimate>,
    /// Seconds between the start of the run and the creation of the result
    pub run_time_sec: f64,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBin {
    pub index: usize,
    /// Fraction of the sheet covered by parts
    pub usage: f64,
    /// The parts placed in the bin, in placement order
    pub placed_parts: Vec<ExtPlacedPart>,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPart {
    pub unit_id: String,
    pub part_id: String,
    /// Rotation about the origin, in degrees
    pub rotation: f64,
    /// Bottom-left corner of the kerf-expanded bounding box
    pub x: f64,
    pub y: f64,
    /// Transformation which maps the outline as defined in the input onto the sheet
    pub transformation: ExtTransformation,
}

/// A part-unit which could not be placed
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtUnplacedPart {
    pub unit_id: String,
    pub part_id: String,
    pub reason: UnplacedReason,
}

/// Represents a proper rigid transformation defined as a rotation about the origin followed by translation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtTransformation {
    /// The rotation angle in degrees
    pub rotation: f64,
    /// The translation vector (x, y)
    pub translation: (f64, f64),
}

impl From<DTransformation> for ExtTransformation {
    fn from(dt: DTransformation) -> Self {
        ExtTransformation {
            rotation: dt.rotation(),
            translation: dt.translation(),
        }
    }
}
