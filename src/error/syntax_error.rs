#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a request.
pub enum SyntaxError {
    /// The tokenizer found text that is not part of the expression language.
    UnexpectedToken {
        /// The offending text.
        token: String,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedBrackets,
    /// A numeral that does not parse as a real number, such as `1.2.3`.
    InvalidNumber {
        /// The numeral as written.
        literal: String,
    },
    /// An operator has nothing on one of the sides it needs, as in `2+` or
    /// `()`.
    MissingOperand,
    /// A token range that is neither a single operand nor contains an
    /// operator, such as two adjacent numbers.
    InvalidSyntax {
        /// The tokens of the offending range.
        fragment: String,
    },
    /// A prefix operator found an operand on its left.
    OperatorArity {
        /// The operator name.
        operator: &'static str,
    },
    /// An expression with more tokens than the tree builder accepts.
    TooLong {
        /// Number of tokens in the expression.
        tokens: usize,
        /// The largest accepted number of tokens.
        limit:  usize,
    },
    /// A matrix cell is neither `<number>` nor `<number>/<number>`.
    InvalidCell {
        /// The cell text.
        cell: String,
    },
    /// A matrix literal with no rows or no columns.
    EmptyGrid,
    /// A matrix literal whose rows differ in length.
    RaggedGrid {
        /// Index of the first row with the wrong length.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
    /// A field name the calculator does not evaluate over.
    UnsupportedField {
        /// The requested field name.
        name: String,
    },
    /// A variable slot outside `A`..`Z`.
    InvalidSlot {
        /// The requested slot.
        name: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Syntax error: unexpected token '{token}'")
            },
            Self::UnbalancedBrackets => write!(f, "Syntax error: brackets are not balanced"),
            Self::InvalidNumber { literal } => {
                write!(f, "Syntax error: wrong format for a real number '{literal}'")
            },
            Self::MissingOperand => write!(f, "Syntax error: an operand is missing"),
            Self::InvalidSyntax { fragment } => {
                write!(f, "Syntax error: invalid syntax near '{fragment}'")
            },
            Self::OperatorArity { operator } => write!(f,
                                                       "Syntax error: operator '{operator}' takes exactly one operand on its right"),
            Self::TooLong { tokens, limit } => write!(f,
                                                      "Syntax error: the expression has {tokens} tokens, at most {limit} are allowed"),
            Self::InvalidCell { cell } => write!(f,
                                                 "Syntax error: the cells do not represent real numbers ('{cell}')"),
            Self::EmptyGrid => write!(f, "Syntax error: the matrix has no cells"),
            Self::RaggedGrid { row, expected, found } => write!(f,
                                                                "Syntax error: row {row} has {found} cells, expected {expected}"),
            Self::UnsupportedField { name } => {
                write!(f, "Syntax error: unsupported field '{name}'")
            },
            Self::InvalidSlot { name } => {
                write!(f, "Syntax error: '{name}' is not a variable between A and Z")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
