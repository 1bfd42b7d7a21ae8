use crate::{
    ast::NodeKind,
    error::{Operation, SemanticError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    matrix::Matrix,
};

impl Context<'_> {
    /// Evaluates a prefix matrix operator.
    ///
    /// Every prefix operator needs a matrix operand; trace, determinant and
    /// inverse additionally need it to be square, and inverse needs it to be
    /// non-singular. Rank is returned as a number.
    ///
    /// # Errors
    /// - `NumberOperand` if the operand is a number.
    /// - `NonSquare` for trace, determinant or inverse of a rectangular
    ///   matrix.
    /// - `SingularMatrix` for the inverse of a matrix with zero determinant.
    ///
    /// # Example
    /// ```
    /// use matrica::{
    ///     ast::NodeKind,
    ///     config::Settings,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     matrix::Matrix,
    /// };
    ///
    /// let context = Context { variables: &[],
    ///                         answer:    None,
    ///                         settings:  Settings::default(), };
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    ///
    /// assert_eq!(context.eval_unary(NodeKind::Rank, &Value::Matrix(m.clone())),
    ///            Ok(Value::Scalar(1.0)));
    /// assert!(context.eval_unary(NodeKind::Inverse, &Value::Matrix(m)).is_err());
    /// ```
    pub fn eval_unary(&self, kind: NodeKind, operand: &Value) -> EvalResult<Value> {
        let operation = match kind {
            NodeKind::Trace => Operation::Trace,
            NodeKind::Determinant => Operation::Determinant,
            NodeKind::Rank => Operation::Rank,
            NodeKind::Transpose => Operation::Transpose,
            NodeKind::Inverse => Operation::Inverse,
            _ => return Err(SemanticError::MalformedTree),
        };

        let Value::Matrix(m) = operand else {
            return Err(SemanticError::NumberOperand { operation });
        };

        match operation {
            Operation::Trace => Ok(Value::Scalar(square(operation, m)?.trace())),
            Operation::Determinant => Ok(Value::Scalar(square(operation, m)?.determinant())),
            Operation::Rank => {
                // A rank never exceeds the matrix dimensions, far below 2^24.
                #[allow(clippy::cast_precision_loss)]
                let rank = m.rank() as f32;
                Ok(Value::Scalar(rank))
            },
            Operation::Transpose => Ok(Value::Matrix(m.transposed())),
            Operation::Inverse => Ok(Value::Matrix(self.checked_inverse(square(operation, m)?)?)),
            _ => Err(SemanticError::MalformedTree),
        }
    }
}

/// Passes `m` through if it is square.
fn square(operation: Operation, m: &Matrix<f32>) -> Result<&Matrix<f32>, SemanticError> {
    if m.is_square() { Ok(m) } else { Err(SemanticError::NonSquare { operation }) }
}
