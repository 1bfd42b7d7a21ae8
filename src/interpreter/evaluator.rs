/// Core evaluation logic.
///
/// Holds the evaluation context and the post-order tree walk that dispatches
/// on node kinds.
pub mod core;

/// Unary operator evaluation.
///
/// The prefix matrix operators: trace, determinant, rank, transpose and
/// inverse.
pub mod unary;

/// Binary operator evaluation.
///
/// Addition, subtraction, multiplication, division and powers over scalars
/// and matrices.
pub mod binary;
