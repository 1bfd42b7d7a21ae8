use crate::{
    ast::{Node, NodeId, NodeKind, Tree, Variable},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::utils::{check_brackets, find_split, fragment, strip_brackets},
    },
};

/// Result type used by the tokenizer and the tree builder.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Largest number of tokens [`build`] accepts.
///
/// Building and evaluating recurse once per operator, so the cap bounds the
/// stack depth of both.
pub const MAX_TOKENS: usize = 1024;

/// Tokenizes and builds an expression in one step.
///
/// # Example
/// ```
/// use matrica::{ast::NodeKind, interpreter::parser::core::parse};
///
/// let tree = parse("2+3*4").unwrap();
/// let root = tree.node(tree.root().unwrap()).unwrap();
/// assert_eq!(root.kind, NodeKind::Plus);
///
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(text: &str) -> ParseResult<Tree> {
    let tokens = tokenize(text)?;
    build(&tokens)
}

/// Builds the expression tree for a whole token sequence.
///
/// Brackets are validated once up front; the recursive builder then works on
/// token ranges and pushes every node after its children, so the root ends
/// up last in the arena.
///
/// # Errors
/// - `TooLong` for more than [`MAX_TOKENS`] tokens.
/// - `UnbalancedBrackets` if brackets do not match.
/// - `MissingOperand` if an operator has an empty side, or for empty input.
/// - `OperatorArity` if a prefix operator has something on its left.
/// - `InvalidSyntax` for a range that is neither one operand nor contains an
///   operator.
/// - `InvalidNumber` for a malformed numeral.
pub fn build(tokens: &[Token]) -> ParseResult<Tree> {
    if tokens.len() > MAX_TOKENS {
        return Err(SyntaxError::TooLong { tokens: tokens.len(),
                                          limit:  MAX_TOKENS, });
    }
    check_brackets(tokens)?;

    let mut tree = Tree::new();
    build_range(tokens, 0, tokens.len(), &mut tree)?;
    Ok(tree)
}

/// Builds the subtree for `tokens[start..end]` and returns its root.
fn build_range(tokens: &[Token],
               start: usize,
               end: usize,
               tree: &mut Tree)
               -> ParseResult<NodeId> {
    let (start, end) = strip_brackets(tokens, start, end);

    let Some(position) = find_split(tokens, start, end) else {
        return build_leaf(&tokens[start..end], tree);
    };

    let operator = &tokens[position];
    if operator.is_prefix_operator() {
        // Only prefix operators remain at this level; the leftmost one owns
        // the rest of the range.
        let first = &tokens[start];
        if !first.is_prefix_operator() {
            return Err(SyntaxError::OperatorArity { operator: operator.symbol()
                                                                      .unwrap_or_default() });
        }
        let operand = build_range(tokens, start + 1, end, tree)?;
        return Ok(tree.push(Node::unary(operator_kind(first)?, operand)));
    }

    let left = build_range(tokens, start, position, tree)?;
    let right = build_range(tokens, position + 1, end, tree)?;
    Ok(tree.push(Node::binary(operator_kind(operator)?, left, right)))
}

/// Builds a leaf from a range without operators.
fn build_leaf(tokens: &[Token], tree: &mut Tree) -> ParseResult<NodeId> {
    let kind = match tokens {
        [] => return Err(SyntaxError::MissingOperand),
        [Token::Number(literal)] => {
            let value =
                literal.parse::<f32>()
                       .map_err(|_| SyntaxError::InvalidNumber { literal: literal.clone() })?;
            NodeKind::Number(value)
        },
        [Token::Variable(slot)] => NodeKind::Variable(Variable::Slot(*slot)),
        [Token::Answer] => NodeKind::Variable(Variable::Answer),
        _ => return Err(SyntaxError::InvalidSyntax { fragment: fragment(tokens) }),
    };

    Ok(tree.push(Node::leaf(kind)))
}

/// Maps an operator token to its node kind.
fn operator_kind(token: &Token) -> ParseResult<NodeKind> {
    match token {
        Token::Plus => Ok(NodeKind::Plus),
        Token::Minus => Ok(NodeKind::Minus),
        Token::Star => Ok(NodeKind::Multiply),
        Token::Slash => Ok(NodeKind::Divide),
        Token::Caret => Ok(NodeKind::Power),
        Token::Trace => Ok(NodeKind::Trace),
        Token::Determinant => Ok(NodeKind::Determinant),
        Token::Rank => Ok(NodeKind::Rank),
        Token::Transpose => Ok(NodeKind::Transpose),
        Token::Inverse => Ok(NodeKind::Inverse),
        Token::Number(_) | Token::Variable(_) | Token::Answer | Token::LParen | Token::RParen => {
            Err(SyntaxError::InvalidSyntax { fragment: token.to_string() })
        },
    }
}
