/// Exporting solutions out of the library
pub mod export;

/// External representations of instances and solutions
pub mod ext_repr;

/// Importing instances into the library
pub mod import;
