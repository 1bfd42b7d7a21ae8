use std::str::FromStr;

use crate::{
    ast::Slot,
    error::{Error, SyntaxError},
    interpreter::value::core::Value,
};

/// The number field an expression is evaluated over.
///
/// Only the reals are evaluated; the matrix algebra itself is generic over
/// any [`Field`](crate::matrix::Field).
///
/// # Example
/// ```
/// use matrica::dispatcher::query::FieldKind;
///
/// assert_eq!("real".parse::<FieldKind>(), Ok(FieldKind::Real));
/// assert!("complex".parse::<FieldKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Single precision real numbers.
    #[default]
    Real,
}

impl FromStr for FieldKind {
    type Err = SyntaxError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "real" => Ok(Self::Real),
            _ => Err(SyntaxError::UnsupportedField { name: name.to_string() }),
        }
    }
}

/// Where a variable gets its matrix from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitSource {
    /// A literal grid of cells, each `<number>` or `<number>/<number>`.
    Cells(Vec<Vec<String>>),
    /// The current value of `ans`, which must be a matrix.
    LastAnswer,
}

/// A request issued to a [`Calculator`](crate::dispatcher::core::Calculator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Evaluates an expression and stores the result in `ans`.
    Evaluate {
        /// The expression.
        text:  String,
        /// The field to evaluate over.
        field: FieldKind,
    },
    /// Stores a matrix in a variable slot.
    InitVariable {
        /// The slot to write.
        slot:   Slot,
        /// The matrix to store.
        source: InitSource,
    },
    /// Solves a linear system given as an augmented matrix.
    SolveSystem {
        /// Coefficient cells with the constants in the last column.
        cells: Vec<Vec<String>>,
    },
}

impl Request {
    /// Shorthand for evaluating `text` over the reals.
    pub fn evaluate(text: impl Into<String>) -> Self {
        Self::Evaluate { text:  text.into(),
                         field: FieldKind::Real, }
    }
}

/// The answer to a [`Request`].
///
/// The error's `Display` output is the message shown to the user.
pub type Response = Result<Value, Error>;
