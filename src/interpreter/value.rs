/// Runtime values.
///
/// Defines `Value`, the result of evaluating an expression tree node: either
/// a scalar or a matrix. Conversions from the underlying types and the
/// accessors the evaluator uses to check operand kinds live here as well.
pub mod core;
