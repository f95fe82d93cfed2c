use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::Builtins,
        value::core::Value,
    },
    runtime::HostInputs,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Read-only collaborators of one evaluation call.
///
/// The evaluator itself holds no mutable state: everything a script changes
/// lives in the [`Environment`] passed to [`Evaluator::eval`].
///
/// ## Usage
///
/// ```
/// use ascent::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         environment::Environment,
///         evaluator::{core::Evaluator, function::core::Builtins},
///         value::core::Value,
///     },
///     runtime::HostInputs,
/// };
///
/// let builtins = Builtins::default();
/// let inputs = HostInputs::default();
/// let evaluator = Evaluator::new(&builtins, &inputs);
///
/// let expr = Expr::Binary { left:  Box::new(Expr::literal(1.0)),
///                           op:    BinaryOperator::Add,
///                           right: Box::new(Expr::literal(2.0)), };
///
/// let mut env = Environment::default();
/// assert_eq!(evaluator.eval(&expr, &mut env).unwrap(), Some(Value::Number(3.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    /// Functions supplied by the host, consulted before user functions.
    pub builtins: &'a Builtins,
    /// Query and import variables of this call.
    pub inputs:   &'a HostInputs,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given collaborators.
    #[must_use]
    pub const fn new(builtins: &'a Builtins, inputs: &'a HostInputs) -> Self {
        Self { builtins, inputs }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; every construct, statements
    /// included, is handled here.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment read and updated by the expression.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one (loops, definitions, directives and
    /// references to unbound names).
    pub fn eval(&self, expr: &Expr, env: &mut Environment) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value } => Ok(Some(Self::eval_literal(value))),
            Expr::Query { name } => Ok(Some(self.eval_query(name))),
            Expr::Variable { name } => self.eval_variable(name, env),
            Expr::Binary { left, op, right } => self.eval_binary_op(left, *op, right, env).map(Some),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.eval_ternary(condition, then_branch, else_branch, env)
            },
            Expr::Call { name, arguments } => self.eval_call(name, arguments, env).map(Some),
            Expr::FunctionDefinition { name, body } => {
                Self::attach_body(name, body, env);
                Ok(None)
            },
            Expr::For { init,
                        condition,
                        step,
                        body, } => self.eval_for(init, condition, step, body, env),
            Expr::While { condition, body } => self.eval_while(condition, body, env),
            Expr::Block { body } => self.eval_sequence(body, env),
            Expr::Let { name, value } | Expr::Assign { name, value } => {
                self.eval_binding(name, value, env).map(Some)
            },
            Expr::CompoundAssignment { name, op, value } => {
                self.eval_compound(name, *op, value, env).map(Some)
            },
            Expr::Return { value } => self.eval(value, env),
            Expr::Namespace { name } | Expr::Using { name } => {
                env.add_predicate(name);
                Ok(None)
            },
            Expr::Import { name, .. } => {
                self.eval_import(name, env)?;
                Ok(None)
            },
            Expr::Access { target, member } => self.eval_access(target, member, env).map(Some),
            Expr::MemberWrite { target,
                                member,
                                value, } => {
                self.eval_member_write(target, member, value, env).map(Some)
            },
        }
    }

    /// Evaluates statements in order against `env`.
    ///
    /// # Returns
    /// The value of the last statement that produced one, or `None` if
    /// none did.
    pub fn eval_sequence(&self,
                         statements: &[Expr],
                         env: &mut Environment)
                         -> EvalResult<Option<Value>> {
        let mut last = None;
        for statement in statements {
            if let Some(value) = self.eval(statement, env)? {
                last = Some(value);
            }
        }
        Ok(last)
    }

    fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Text(s) => Value::Text(s.clone()),
            LiteralValue::Bool(b) => Value::Boolean(*b),
        }
    }

    /// Evaluates `cond ? a : b`.
    ///
    /// The condition must be a boolean or exactly the number `1` or `0`.
    ///
    /// # Errors
    /// `TypeMismatch` for any other condition value.
    fn eval_ternary(&self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr,
                    env: &mut Environment)
                    -> EvalResult<Option<Value>> {
        let value = self.eval_child(condition, env, "ternary condition")?;
        let holds = match value {
            Value::Boolean(b) => Some(b),
            Value::Number(n) => crate::util::num::boolean_equivalent(n),
            _ => None,
        };

        match holds {
            Some(true) => self.eval(then_branch, env),
            Some(false) => self.eval(else_branch, env),
            None => Err(RuntimeError::TypeMismatch {
                details: format!("ternary condition must be a boolean, 0 or 1, found {value}"),
            }),
        }
    }
}
