/// The operation an error message refers to.
///
/// `Display` renders the verb phrase used in messages, so that
/// `can not {operation} a number` reads naturally for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `^`
    Power,
    /// `tr`
    Trace,
    /// `det`
    Determinant,
    /// `rk`
    Rank,
    /// `trans`
    Transpose,
    /// `inv`
    Inverse,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Power => "take a power of",
            Self::Trace => "take trace of",
            Self::Determinant => "find determinant of",
            Self::Rank => "find rank of",
            Self::Transpose => "transpose",
            Self::Inverse => "take an inverse of",
        };
        write!(f, "{phrase}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a well-formed request.
pub enum SemanticError {
    /// One operand is a number and the other a matrix.
    TypeMismatch {
        /// The operation attempted.
        operation: Operation,
    },
    /// Matrix operands whose shapes do not fit together.
    DimensionMismatch {
        /// The operation attempted.
        operation: Operation,
        /// `(rows, columns)` of the left operand.
        left:      (usize, usize),
        /// `(rows, columns)` of the right operand.
        right:     (usize, usize),
    },
    /// A matrix operator was applied to a number.
    NumberOperand {
        /// The operation attempted.
        operation: Operation,
    },
    /// An operation that needs a square matrix got a rectangular one.
    NonSquare {
        /// The operation attempted.
        operation: Operation,
    },
    /// The matrix has determinant zero and can not be inverted.
    SingularMatrix,
    /// A matrix appeared on either side of `/`.
    MatrixDivision,
    /// The divisor is zero.
    DivisionByZero,
    /// A matrix was used as an exponent.
    MatrixExponent,
    /// A matrix was raised to a power that is not an integer.
    FractionalExponent,
    /// A matrix was raised to an integer power too large to represent.
    ExponentOutOfRange,
    /// A matrix variable was initialized from an `ans` holding a number.
    AnswerIsNumber,
    /// A variable, or `ans`, was read before anything was stored in it.
    UnsetVariable {
        /// `A`..`Z` or `ans`.
        name: String,
    },
    /// A tree node is missing a child its kind needs, or the tree is empty.
    /// Only hand-built trees can be malformed.
    MalformedTree,
    /// A matrix cell written as a fraction has a zero denominator.
    CellDivisionByZero {
        /// The cell text.
        cell: String,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { operation } => {
                write!(f, "Semantic error: can not {operation} number and matrix")
            },
            Self::DimensionMismatch { operation,
                                      left: (left_rows, left_columns),
                                      right: (right_rows, right_columns), } => write!(f,
                                                                                      "Semantic error: can not {operation} matrices of dimensions {left_rows}x{left_columns} and {right_rows}x{right_columns}"),
            Self::NumberOperand { operation } => {
                write!(f, "Semantic error: can not {operation} a number")
            },
            Self::NonSquare { operation } => {
                write!(f, "Semantic error: can not {operation} a non square matrix")
            },
            Self::SingularMatrix => write!(f, "Semantic error: matrix is a singular matrix"),
            Self::MatrixDivision => write!(f, "Semantic error: can not divide matrices"),
            Self::DivisionByZero => write!(f, "Semantic error: can not divide by 0"),
            Self::MatrixExponent => write!(f, "Semantic error: can not take matrix as the power"),
            Self::FractionalExponent => {
                write!(f, "Semantic error: can not take a matrix to a fractional power")
            },
            Self::ExponentOutOfRange => {
                write!(f, "Semantic error: the power of a matrix is out of range")
            },
            Self::AnswerIsNumber => {
                write!(f, "Semantic error: can not initialize variable with number")
            },
            Self::UnsetVariable { name } => {
                write!(f, "Semantic error: variable {name} is not initialized")
            },
            Self::MalformedTree => write!(f, "Semantic error: the expression tree is malformed"),
            Self::CellDivisionByZero { cell } => {
                write!(f, "Semantic error: division by zero in cell '{cell}'")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
