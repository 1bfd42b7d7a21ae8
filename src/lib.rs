//! # matrica
//!
//! matrica is a matrix calculator engine written in Rust.
//! It tokenizes and evaluates expressions over real scalars and matrices,
//! keeps 26 matrix variables and a last-answer register, and solves linear
//! systems by row reduction.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    dispatcher::core::Calculator,
    interpreter::value::core::Value,
    script::{ScriptError, run_script},
};

/// Defines the expression tree.
///
/// This module declares the arena [`Tree`](ast::Tree) the tree builder
/// produces and the evaluator walks, together with its node kinds and the
/// variable slots `A`..`Z`.
pub mod ast;
/// Numeric settings of a calculator.
///
/// Zero and snapping tolerances with their defaults.
pub mod config;
/// Routes requests to the interpreter and the matrix algebra.
///
/// This module owns the calculator state: the variable slots, the `ans`
/// register and the settings. It validates matrix literals and turns each
/// request into a response.
///
/// # Responsibilities
/// - Evaluate expressions and keep `ans` up to date.
/// - Initialize variables from cells or from `ans`.
/// - Solve linear systems given as augmented matrices.
pub mod dispatcher;
/// Provides unified error types for parsing and evaluation.
///
/// Every failure is either a syntax error, raised before anything is
/// computed, or a semantic error, raised by a well-formed request that can
/// not be computed. Both render to the message shown to the user.
pub mod error;
/// Expression tokenizing, tree building and evaluation.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Builds an expression tree by splitting at the loosest operator.
/// - Evaluates the tree over scalars and matrices.
pub mod interpreter;
/// Matrices over a generic field.
///
/// Elementwise arithmetic, products, transposes and traces, together with
/// determinants, row reduction, rank, inversion and integer powers.
pub mod matrix;
/// Line-based scripts of requests.
///
/// The text form used by the command line tool and the script tests.
pub mod script;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a script on a fresh calculator and returns the last value.
///
/// # Examples
/// ```
/// use matrica::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("(2+3)*4"), Ok(Some(Value::Scalar(20.0))));
///
/// // Variables start out empty.
/// assert!(get_result("A+1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, ScriptError> {
    let mut calculator = Calculator::new();
    run_script(&mut calculator, source, false)
}
