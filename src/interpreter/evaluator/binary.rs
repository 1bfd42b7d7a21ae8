use crate::{
    ast::NodeKind,
    error::{Operation, SemanticError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    matrix::Matrix,
    util::num::f32_to_exponent,
};

impl Context<'_> {
    /// Evaluates a binary operator node.
    ///
    /// Routes `+ -` to [`eval_add_sub`](Self::eval_add_sub), `*` to
    /// [`eval_multiply`](Self::eval_multiply), `/` to
    /// [`eval_divide`](Self::eval_divide) and `^` to
    /// [`eval_power`](Self::eval_power).
    ///
    /// # Example
    /// ```
    /// use matrica::{
    ///     ast::NodeKind,
    ///     config::Settings,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context { variables: &[],
    ///                         answer:    None,
    ///                         settings:  Settings::default(), };
    ///
    /// let result = context.eval_binary(NodeKind::Power, &Value::Scalar(2.0), &Value::Scalar(10.0));
    /// assert_eq!(result, Ok(Value::Scalar(1024.0)));
    /// ```
    pub fn eval_binary(&self, kind: NodeKind, left: &Value, right: &Value) -> EvalResult<Value> {
        match kind {
            NodeKind::Plus => Self::eval_add_sub(Operation::Add, left, right),
            NodeKind::Minus => Self::eval_add_sub(Operation::Subtract, left, right),
            NodeKind::Multiply => Self::eval_multiply(left, right),
            NodeKind::Divide => self.eval_divide(left, right),
            NodeKind::Power => self.eval_power(left, right),
            _ => Err(SemanticError::MalformedTree),
        }
    }

    /// Adds or subtracts two operands of the same kind.
    ///
    /// # Errors
    /// - `TypeMismatch` if one operand is a number and the other a matrix.
    /// - `DimensionMismatch` if the matrices differ in shape.
    pub fn eval_add_sub(operation: Operation, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => {
                Ok(Value::Scalar(if operation == Operation::Add { a + b } else { a - b }))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                check_same_shape(operation, a, b)?;
                Ok(Value::Matrix(if operation == Operation::Add { a + b } else { a - b }))
            },
            _ => Err(SemanticError::TypeMismatch { operation }),
        }
    }

    /// Multiplies numbers, scales a matrix by a number, or forms a matrix
    /// product.
    ///
    /// # Errors
    /// `DimensionMismatch` if the left matrix has a different number of
    /// columns than the right one has rows.
    pub fn eval_multiply(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * b)),
            (Value::Scalar(s), Value::Matrix(m)) | (Value::Matrix(m), Value::Scalar(s)) => {
                Ok(Value::Matrix(m.scale(*s)))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                if a.columns() != b.rows() {
                    return Err(SemanticError::DimensionMismatch { operation: Operation::Multiply,
                                                                  left:      a.shape(),
                                                                  right:     b.shape(), });
                }
                Ok(Value::Matrix(a * b))
            },
        }
    }

    /// Divides two numbers.
    ///
    /// # Errors
    /// - `MatrixDivision` if either operand is a matrix.
    /// - `DivisionByZero` if the divisor is zero under the zero tolerance.
    pub fn eval_divide(&self, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Value::Scalar(a), Value::Scalar(b)) = (left, right) else {
            return Err(SemanticError::MatrixDivision);
        };
        if self.settings.is_zero(*b) {
            return Err(SemanticError::DivisionByZero);
        }
        Ok(Value::Scalar(a / b))
    }

    /// Raises a number or a square matrix to a numeric power.
    ///
    /// Numbers use real exponentiation. Matrices take integer exponents only:
    /// positive ones by repeated squaring, zero gives the identity and
    /// negative ones raise the inverse.
    ///
    /// # Errors
    /// - `MatrixExponent` if the exponent is a matrix.
    /// - `NonSquare` if the base matrix is not square.
    /// - `FractionalExponent` or `ExponentOutOfRange` for an exponent that is
    ///   not a representable integer.
    /// - `SingularMatrix` for a negative exponent on a singular matrix.
    pub fn eval_power(&self, base: &Value, exponent: &Value) -> EvalResult<Value> {
        let Value::Scalar(exponent) = exponent else {
            return Err(SemanticError::MatrixExponent);
        };

        match base {
            Value::Scalar(b) => Ok(Value::Scalar(b.powf(*exponent))),
            Value::Matrix(m) => {
                if !m.is_square() {
                    return Err(SemanticError::NonSquare { operation: Operation::Power });
                }
                let exponent = f32_to_exponent(*exponent)?;
                if exponent >= 0 {
                    return Ok(Value::Matrix(m.pow(exponent.unsigned_abs())));
                }
                let inverse = self.checked_inverse(m)?;
                Ok(Value::Matrix(inverse.pow(exponent.unsigned_abs())))
            },
        }
    }

    /// Inverts a square matrix after checking that it is not singular.
    pub(in crate::interpreter::evaluator) fn checked_inverse(&self,
                                                             m: &Matrix<f32>)
                                                             -> EvalResult<Matrix<f32>> {
        if self.settings.is_zero(m.determinant()) {
            return Err(SemanticError::SingularMatrix);
        }
        Ok(m.inverse())
    }
}

fn check_same_shape(operation: Operation, a: &Matrix<f32>, b: &Matrix<f32>) -> EvalResult<()> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(SemanticError::DimensionMismatch { operation,
                                               left: a.shape(),
                                               right: b.shape() })
    }
}
