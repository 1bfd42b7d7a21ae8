/// Syntax errors.
///
/// Everything that can go wrong before evaluation starts: characters the
/// tokenizer does not recognise, malformed numerals, unbalanced brackets,
/// operators without their operands, and malformed matrix cells.
pub mod syntax_error;
/// Semantic errors.
///
/// Errors raised while evaluating a well-formed request: scalar/matrix type
/// mismatches, incompatible dimensions, non-square or singular operands,
/// division by zero and uninitialized variables.
pub mod semantic_error;

pub use semantic_error::{Operation, SemanticError};
pub use syntax_error::SyntaxError;

/// Any error a request can fail with.
///
/// The `Display` output is the message handed back to the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request text or cells are malformed.
    Syntax(SyntaxError),
    /// The request is well formed but can not be computed.
    Semantic(SemanticError),
}

impl Error {
    /// Returns `true` for [`Error::Syntax`].
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(..))
    }

    /// Returns `true` for [`Error::Semantic`].
    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(..))
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<SemanticError> for Error {
    fn from(error: SemanticError) -> Self {
        Self::Semantic(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(error) => write!(f, "{error}"),
            Self::Semantic(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Semantic(error) => Some(error),
        }
    }
}
