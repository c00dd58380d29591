pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

mod d_transformation;
mod kernel;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use kernel::{bounds, rotate, rotated_bounds, sin_cos_deg};
#[doc(inline)]
pub use transformation::Transformation;
