use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates both operands, left first, and applies `op`.
    ///
    /// # Errors
    /// - `MissingValue` if either operand yields nothing.
    /// - Whatever [`apply_binary`] reports.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 env: &mut Environment)
                                 -> EvalResult<Value> {
        let lhs = self.eval_child(left, env, "left operand")?;
        let rhs = self.eval_child(right, env, "right operand")?;

        apply_binary(op, &lhs, &rhs)
    }
}

/// Applies a binary operator to two values.
///
/// Arithmetic and comparison require two numbers. `+` on anything else first
/// offers the operation to a host object on the left, then falls back to
/// concatenating both operands as text.
///
/// # Errors
/// `TypeMismatch` if an operator other than `+` receives a non-number.
///
/// # Example
/// ```
/// use ascent::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::apply_binary, value::core::Value},
/// };
///
/// let sum = apply_binary(BinaryOperator::Add, &Value::from("a"), &Value::Number(1.0)).unwrap();
/// assert_eq!(sum, Value::from("a1"));
///
/// let less = apply_binary(BinaryOperator::Less, &1.0.into(), &2.0.into()).unwrap();
/// assert_eq!(less, Value::Boolean(true));
///
/// assert!(apply_binary(BinaryOperator::Mul, &true.into(), &2.0.into()).is_err());
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(apply_numeric(op, *a, *b)),
        (_, _) if op == BinaryOperator::Add => Ok(add_fallback(lhs, rhs)),
        (_, _) => Err(type_mismatch(op, lhs, rhs)),
    }
}

/// Applies `op` to two numbers. Comparisons yield booleans.
#[must_use]
pub fn apply_numeric(op: BinaryOperator, a: f64, b: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Number(a + b),
        BinaryOperator::Sub => Value::Number(a - b),
        BinaryOperator::Mul => Value::Number(a * b),
        BinaryOperator::Div => Value::Number(a / b),
        BinaryOperator::Mod => Value::Number(a % b),
        BinaryOperator::Pow => Value::Number(a.powf(b)),
        BinaryOperator::Less => Value::Boolean(a < b),
        BinaryOperator::Greater => Value::Boolean(a > b),
    }
}

fn add_fallback(lhs: &Value, rhs: &Value) -> Value {
    if let Value::Object(object) = lhs
       && let Some(sum) = object.try_add(rhs)
    {
        return sum;
    }
    Value::Text(format!("{lhs}{rhs}"))
}

pub(crate) fn type_mismatch(op: BinaryOperator, lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  lhs.kind_name(),
                                                  rhs.kind_name()), }
}
