use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, arguments, conditions and right-hand sides all need a
    /// value; this helper reports a `MissingValue` error naming `context`
    /// when the expression yields nothing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment to evaluate against.
    /// - `context`: What the value is needed for, used in the error.
    ///
    /// # Returns
    /// The evaluated `Value`.
    ///
    /// # Example
    /// ```
    /// use ascent::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         environment::Environment,
    ///         evaluator::{core::Evaluator, function::core::Builtins},
    ///         value::core::Value,
    ///     },
    ///     runtime::HostInputs,
    /// };
    ///
    /// let (builtins, inputs) = (Builtins::default(), HostInputs::default());
    /// let evaluator = Evaluator::new(&builtins, &inputs);
    /// let mut env = Environment::default();
    ///
    /// let v = evaluator.eval_child(&Expr::literal(10.0), &mut env, "test").unwrap();
    /// assert_eq!(v, Value::Number(10.0));
    ///
    /// let unbound = Expr::Variable { name: "nope".to_string() };
    /// assert!(evaluator.eval_child(&unbound, &mut env, "test").is_err());
    /// ```
    pub fn eval_child(&self,
                      expr: &Expr,
                      env: &mut Environment,
                      context: &'static str)
                      -> EvalResult<Value> {
        self.eval(expr, env)?.ok_or(RuntimeError::MissingValue { context })
    }
}

