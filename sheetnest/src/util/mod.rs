/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::SeparationConfig;
#[doc(inline)]
pub use fpa::FPA;
