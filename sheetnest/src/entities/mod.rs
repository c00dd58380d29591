mod bin;
mod instance;
mod part;
mod placed_part;
mod placement;
mod problem;
mod sheet;
mod solution;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use part::{GRAIN_TOLERANCE, GrainConstraint, PartSpec, PartUnit};
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use placement::{BinId, Placement};
#[doc(inline)]
pub use problem::NestingProblem;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use solution::{NestingResult, UnplacedPart, UnplacedReason};
