use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// A `while` condition above this number counts as true.
const WHILE_THRESHOLD: f64 = 0.5;

impl Evaluator<'_> {
    /// Evaluates `for(init; condition; step){ body }`.
    ///
    /// `init`, the condition and `step` run directly against `env`; body
    /// statements run through [`Self::eval_isolated`]. The loop runs while
    /// the condition is `true` and stops as soon as it yields nothing.
    ///
    /// # Returns
    /// Always `None`.
    ///
    /// # Errors
    /// `Cast` if the condition yields a non-boolean.
    pub(crate) fn eval_for(&self,
                           init: &Expr,
                           condition: &Expr,
                           step: &Expr,
                           body: &[Expr],
                           env: &mut Environment)
                           -> EvalResult<Option<Value>> {
        self.eval(init, env)?;

        while let Some(value) = self.eval(condition, env)?
              && value.as_bool()?
        {
            self.eval_isolated(body, env)?;
            self.eval(step, env)?;
        }

        Ok(None)
    }

    /// Evaluates `while(condition){ body }`.
    ///
    /// The condition may be a boolean or a number, where anything above
    /// `0.5` is true.
    ///
    /// # Returns
    /// Always `None`.
    ///
    /// # Errors
    /// `Cast` if the condition yields neither a boolean nor a number.
    pub(crate) fn eval_while(&self,
                             condition: &Expr,
                             body: &[Expr],
                             env: &mut Environment)
                             -> EvalResult<Option<Value>> {
        while self.while_condition(condition, env)? {
            self.eval_isolated(body, env)?;
        }

        Ok(None)
    }

    fn while_condition(&self, condition: &Expr, env: &mut Environment) -> EvalResult<bool> {
        match self.eval(condition, env)? {
            None => Ok(false),
            Some(Value::Boolean(b)) => Ok(b),
            Some(Value::Number(n)) => Ok(n > WHILE_THRESHOLD),
            Some(other) => Err(RuntimeError::Cast { expected: "boolean",
                                                    found:    other.kind_name(), }),
        }
    }

    /// Runs each statement of a loop body against a fresh clone of `env`.
    ///
    /// After each statement only the names already bound in `env` are copied
    /// back, so a `let` inside a loop body is gone by the next statement.
    /// Function bodies attached meanwhile survive because the function table
    /// is shared between clones.
    pub(crate) fn eval_isolated(&self, body: &[Expr], env: &mut Environment) -> EvalResult<()> {
        for statement in body {
            let mut scratch = env.clone();
            self.eval(statement, &mut scratch)?;
            env.merge_existing(&scratch);
        }
        Ok(())
    }
}
