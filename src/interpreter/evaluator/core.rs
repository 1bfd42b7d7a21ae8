use crate::{
    ast::{NodeId, NodeKind, Tree, Variable},
    config::Settings,
    error::SemanticError,
    interpreter::value::core::Value,
    matrix::Matrix,
};

/// Result type used by the evaluator.
///
/// Every evaluation step returns either a value or the first
/// `SemanticError` encountered.
pub type EvalResult<T> = Result<T, SemanticError>;

/// Read-only state an expression is evaluated against.
///
/// A context borrows the variable store of its calculator for the length of
/// one evaluation; nothing is written back until the evaluation succeeds.
///
/// # Example
/// ```
/// use matrica::{
///     config::Settings,
///     interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value},
///     matrix::Matrix,
/// };
///
/// let mut variables = vec![None; 26];
/// variables[0] = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
///
/// let context = Context { variables: &variables,
///                         answer:    None,
///                         settings:  Settings::default(), };
///
/// let tree = parse("tr A * 2").unwrap();
/// assert_eq!(context.eval(&tree), Ok(Value::Scalar(10.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The 26 variable slots, indexed by [`Slot::index`](crate::ast::Slot::index).
    pub variables: &'a [Option<Matrix<f32>>],
    /// The value of `ans`, if any.
    pub answer:    Option<&'a Value>,
    /// Tolerances for zero checks.
    pub settings:  Settings,
}

impl Context<'_> {
    /// Evaluates a whole tree.
    ///
    /// ## Errors
    /// Returns the first error of the walk, or `MalformedTree` for an empty
    /// tree.
    pub fn eval(&self, tree: &Tree) -> EvalResult<Value> {
        let root = tree.root().ok_or(SemanticError::MalformedTree)?;
        self.eval_node(tree, root)
    }

    /// Evaluates the subtree rooted at `id`.
    ///
    /// Children are evaluated first, left before right; the first error stops
    /// the walk and is returned unchanged.
    ///
    /// ## Errors
    /// `MalformedTree` for an id outside the tree, a child that does not
    /// precede its parent, or a node whose children do not fit its kind.
    pub fn eval_node(&self, tree: &Tree, id: NodeId) -> EvalResult<Value> {
        let (Some(node), Some((left, right))) = (tree.node(id), tree.children(id)) else {
            return Err(SemanticError::MalformedTree);
        };

        let left = left.map(|child| self.eval_node(tree, child))
                       .transpose()?;
        let right = right.map(|child| self.eval_node(tree, child))
                         .transpose()?;

        match (node.kind, left, right) {
            (NodeKind::Number(n), ..) => Ok(Value::Scalar(n)),
            (NodeKind::Variable(variable), ..) => self.eval_variable(variable),
            (kind @ (NodeKind::Plus
             | NodeKind::Minus
             | NodeKind::Multiply
             | NodeKind::Divide
             | NodeKind::Power),
             Some(left),
             Some(right)) => self.eval_binary(kind, &left, &right),
            (kind @ (NodeKind::Trace
             | NodeKind::Determinant
             | NodeKind::Rank
             | NodeKind::Transpose
             | NodeKind::Inverse),
             Some(operand),
             None) => self.eval_unary(kind, &operand),
            _ => Err(SemanticError::MalformedTree),
        }
    }

    /// Reads a variable slot or `ans`.
    ///
    /// ## Errors
    /// `SemanticError::UnsetVariable` if nothing has been stored yet.
    pub fn eval_variable(&self, variable: Variable) -> EvalResult<Value> {
        let value = match variable {
            Variable::Slot(slot) => self.variables
                                        .get(slot.index())
                                        .and_then(Option::as_ref)
                                        .map(|m| Value::Matrix(m.clone())),
            Variable::Answer => self.answer.cloned(),
        };
        value.ok_or_else(|| SemanticError::UnsetVariable { name: variable.to_string() })
    }
}
