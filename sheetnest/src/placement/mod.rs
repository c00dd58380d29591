mod evaluator;
mod footprint;

#[doc(inline)]
pub use evaluator::{Candidate, Conflict, first_conflict, is_valid_placement};
#[doc(inline)]
pub use footprint::footprint_dims;
