use crate::matrix::Matrix;

/// Represents a runtime value in the calculator.
///
/// Every node of an expression tree evaluates to one of these, and the `ans`
/// register holds the last one computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single real number.
    Scalar(f32),
    /// A real matrix.
    Matrix(Matrix<f32>),
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Scalar(v)
    }
}

impl From<Matrix<f32>> for Value {
    fn from(m: Matrix<f32>) -> Self {
        Self::Matrix(m)
    }
}

impl Value {
    /// Returns the scalar, or `None` for a matrix.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Some(2.5));
    /// ```
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Matrix(_) => None,
        }
    }

    /// Returns the matrix, or `None` for a scalar.
    #[must_use]
    pub const fn as_matrix(&self) -> Option<&Matrix<f32>> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Scalar(_) => None,
        }
    }

    /// Consumes the value and returns the matrix, or `None` for a scalar.
    #[must_use]
    pub fn into_matrix(self) -> Option<Matrix<f32>> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Scalar(_) => None,
        }
    }

    /// Returns `true` if the value is [`Value::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    /// Returns `true` if the value is [`Value::Matrix`].
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
