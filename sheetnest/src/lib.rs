#![doc = document_features::document_features!()]
//! Core of a rectangular-sheet nesting engine.
//!
//! Parts are packed by their rotated, kerf-expanded bounding boxes: true polygon
//! intersection is never computed. This trades nesting density for speed and a
//! collision model that is correct by construction.

/// Typed errors raised when a nesting run is rejected
pub mod error;

/// Entities to model a sheet nesting run: parts, sheets, bins and results
pub mod entities;

/// Geometric primitives and the (pure) geometry kernel
pub mod geometry;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Estimates derived from a finished nesting result
pub mod metrics;

/// Deciding whether a footprint can be placed in a bin
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
