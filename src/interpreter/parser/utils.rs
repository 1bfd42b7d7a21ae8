use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Checks that every `(` is closed and no `)` appears before its `(`.
///
/// # Errors
/// Returns `SyntaxError::UnbalancedBrackets` otherwise.
pub fn check_brackets(tokens: &[Token]) -> ParseResult<()> {
    let mut depth = 0_usize;
    for token in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.checked_sub(1)
                             .ok_or(SyntaxError::UnbalancedBrackets)?;
            },
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(SyntaxError::UnbalancedBrackets) }
}

/// Returns `true` if `tokens[start..end]` is enclosed by a single matching
/// pair of brackets.
///
/// The range must open with `(` and the bracket depth, scanning left to
/// right, must first return to zero at the very last token. `(A)+(B)` is
/// therefore not wrapped, while `((A)+(B))` is.
///
/// # Example
/// ```
/// use matrica::interpreter::{lexer::tokenize, parser::utils::is_wrapped};
///
/// let wrapped = tokenize("(A+(B))").unwrap();
/// assert!(is_wrapped(&wrapped, 0, wrapped.len()));
///
/// let pairs = tokenize("(A)+(B)").unwrap();
/// assert!(!is_wrapped(&pairs, 0, pairs.len()));
/// ```
#[must_use]
pub fn is_wrapped(tokens: &[Token], start: usize, end: usize) -> bool {
    if end < start + 2 || tokens[start] != Token::LParen {
        return false;
    }

    let mut depth = 0_i32;
    for (i, token) in tokens.iter().enumerate().take(end).skip(start) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            _ => {},
        }
        if depth == 0 {
            return i == end - 1;
        }
    }
    false
}

/// Peels off outer bracket pairs until the range is no longer wrapped.
#[must_use]
pub fn strip_brackets(tokens: &[Token], mut start: usize, mut end: usize) -> (usize, usize) {
    while is_wrapped(tokens, start, end) {
        start += 1;
        end -= 1;
    }
    (start, end)
}

/// Picks the operator a range is split at, or `None` if it has none.
///
/// Tokens are scanned right to left while tracking bracket depth. Each
/// operator scores `split_rank - 4 * depth`, and only a strictly higher score
/// replaces the current choice. An operator inside brackets can thus never
/// beat one outside them, and among equal operators the rightmost wins, which
/// makes `A-B-C` group as `(A-B)-C`.
///
/// # Example
/// ```
/// use matrica::interpreter::{lexer::tokenize, parser::utils::find_split};
///
/// let tokens = tokenize("2-3*4-5").unwrap();
/// assert_eq!(find_split(&tokens, 0, tokens.len()), Some(5));
///
/// let tokens = tokenize("(2-3)*4").unwrap();
/// assert_eq!(find_split(&tokens, 0, tokens.len()), Some(5));
/// ```
#[must_use]
pub fn find_split(tokens: &[Token], start: usize, end: usize) -> Option<usize> {
    let mut best = -1;
    let mut position = None;
    let mut depth = 0;

    for i in (start..end).rev() {
        let token = &tokens[i];
        match token {
            Token::RParen => depth += 1,
            Token::LParen => depth -= 1,
            _ => {},
        }
        if let Some(rank) = token.split_rank()
           && rank - 4 * depth > best
        {
            best = rank - 4 * depth;
            position = Some(i);
        }
    }

    position
}

/// Renders a token range for error messages, tokens separated by spaces.
pub(in crate::interpreter::parser) fn fragment(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
