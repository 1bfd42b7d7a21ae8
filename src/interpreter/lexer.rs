use std::fmt;

use logos::Logos;

use crate::{ast::Slot, error::SyntaxError, interpreter::parser::core::ParseResult};

/// Represents a lexical token of an expression.
///
/// Operator names are matched longest-first, so `trans` is never split into
/// `tr` followed by `ans`. Spaces and tabs between tokens are skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of digits and decimal points such as `3`, `2.5` or `.5`. The
    /// text is kept as written and parsed when the tree is built.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// A variable slot, `A` through `Z`.
    #[regex(r"[A-Z]", parse_slot)]
    Variable(Slot),
    /// `ans`
    #[token("ans")]
    Answer,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `tr`
    #[token("tr")]
    Trace,
    /// `det`
    #[token("det")]
    Determinant,
    /// `inv`
    #[token("inv")]
    Inverse,
    /// `rk`
    #[token("rk")]
    Rank,
    /// `trans`
    #[token("trans")]
    Transpose,
}

impl Token {
    /// The split-rank of an operator token, `None` for anything else.
    ///
    /// The tree builder splits a range at the operator with the highest rank,
    /// so higher ranks bind looser: `+ -` are 4, `* /` are 3, `^` is 2 and the
    /// prefix operators are 1.
    #[must_use]
    pub const fn split_rank(&self) -> Option<i32> {
        match self {
            Self::Plus | Self::Minus => Some(4),
            Self::Star | Self::Slash => Some(3),
            Self::Caret => Some(2),
            Self::Trace | Self::Determinant | Self::Inverse | Self::Rank | Self::Transpose => {
                Some(1)
            },
            Self::Number(_) | Self::Variable(_) | Self::Answer | Self::LParen | Self::RParen => None,
        }
    }

    /// Returns `true` for any operator token.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.split_rank().is_some()
    }

    /// Returns `true` for the prefix operators `tr det inv rk trans`.
    #[must_use]
    pub const fn is_prefix_operator(&self) -> bool {
        matches!(self,
                 Self::Trace | Self::Determinant | Self::Inverse | Self::Rank | Self::Transpose)
    }

    /// The source spelling of a fixed token, `None` for numbers and variables.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Answer => Some("ans"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Caret => Some("^"),
            Self::Trace => Some("tr"),
            Self::Determinant => Some("det"),
            Self::Inverse => Some("inv"),
            Self::Rank => Some("rk"),
            Self::Transpose => Some("trans"),
            Self::Number(_) | Self::Variable(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Variable(slot) => write!(f, "{slot}"),
            _ => write!(f, "{}", self.symbol().unwrap_or_default()),
        }
    }
}

/// Parses a variable slot from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Slot)` for an uppercase letter.
/// - `None` otherwise, which Logos reports as a lexing error.
fn parse_slot(lex: &logos::Lexer<Token>) -> Option<Slot> {
    lex.slice().chars().next().and_then(Slot::from_letter)
}

/// Splits an expression into tokens.
///
/// # Errors
/// Returns `SyntaxError::UnexpectedToken` for the first piece of text that is
/// not a token, such as a lowercase name other than an operator or `ans`.
///
/// # Example
/// ```
/// use matrica::{ast::Slot, interpreter::lexer::{Token, tokenize}};
///
/// let tokens = tokenize("trans(A)*2.5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Transpose,
///                 Token::LParen,
///                 Token::Variable(Slot::from_letter('A').unwrap()),
///                 Token::RParen,
///                 Token::Star,
///                 Token::Number("2.5".to_string())]);
///
/// assert_eq!(tokenize("trA").unwrap()[0], Token::Trace);
/// assert!(tokenize("x+1").is_err());
/// ```
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(SyntaxError::UnexpectedToken { token: lexer.slice().to_string() });
        }
    }

    Ok(tokens)
}
