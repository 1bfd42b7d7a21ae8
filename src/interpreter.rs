/// The evaluator walks expression trees and computes their values.
///
/// Nodes are evaluated post-order: children first, then the node itself,
/// with the first error returned as is. Scalar and matrix operands are
/// checked for the kinds and shapes each operator needs before the matrix
/// algebra is called.
///
/// # Responsibilities
/// - Evaluates every node kind with one exhaustive match.
/// - Resolves variable slots and `ans`.
/// - Reports semantic errors such as mismatched dimensions or singular
///   matrices.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces numerals, variable
/// slots, `ans`, brackets and operators. Multi-letter operator names are
/// matched longest first.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Reports lexical errors for text outside the expression language.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// Rather than descending through precedence levels, the builder picks the
/// loosest-binding operator of a token range as the root and recurses into
/// the ranges on either side of it.
///
/// # Responsibilities
/// - Validates brackets and strips redundant outer pairs.
/// - Selects split points by operator rank and bracket depth.
/// - Reports syntax errors for malformed numerals and misplaced operators.
pub mod parser;
/// The value module defines what an expression evaluates to.
///
/// A value is either a real scalar or a real matrix.
pub mod value;
