/// The calculator facade.
///
/// Owns the 26 variable slots and the `ans` register, and routes each
/// request to the tree builder and evaluator or to the matrix algebra.
pub mod core;

/// Request and response types exchanged with the presentation layer.
pub mod query;

/// Matrix literal cells.
///
/// Validation and parsing of cell grids such as `[["1", "1/2"], ["3", "4"]]`.
pub mod cells;
