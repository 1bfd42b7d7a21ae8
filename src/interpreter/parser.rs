/// Tree building entry points.
///
/// Turns a token sequence into an arena [`Tree`](crate::ast::Tree) by
/// recursively splitting token ranges at their loosest-binding operator.
pub mod core;

/// Range helpers used by the tree builder.
///
/// Bracket validation, outer-bracket stripping and split-point selection.
pub mod utils;
