use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::{apply_numeric, type_mismatch},
            core::{EvalResult, Evaluator},
        },
        value::{core::Value, import::ImportVar},
    },
};

impl Evaluator<'_> {
    /// Resolves a variable: the environment first, then the import table.
    ///
    /// # Returns
    /// `None` for a name bound in neither.
    pub(crate) fn eval_variable(&self, name: &str, env: &Environment) -> EvalResult<Option<Value>> {
        if let Some(value) = env.get(name) {
            return Ok(Some(value.clone()));
        }
        self.inputs.imports.get(name).map(ImportVar::materialize).transpose()
    }

    /// Reads a host query value. A query the host did not supply reads as `0`.
    pub(crate) fn eval_query(&self, name: &str) -> Value {
        if let Some(value) = self.inputs.queries.get(name) {
            return value.clone();
        }
        tracing::warn!(query = name, "query variable not supplied, using 0");
        Value::Number(0.0)
    }

    /// Evaluates `let name = value` or `name = value`.
    ///
    /// # Returns
    /// The bound value.
    pub(crate) fn eval_binding(&self,
                               name: &str,
                               value: &Expr,
                               env: &mut Environment)
                               -> EvalResult<Value> {
        let value = self.eval_child(value, env, "assignment")?;
        env.set(name, value.clone());
        Ok(value)
    }

    /// Evaluates `name += value`, `name -= value`, `name++` and `name--`.
    ///
    /// # Returns
    /// The updated value.
    ///
    /// # Errors
    /// - `UndefinedReference` if `name` is unbound.
    /// - `TypeMismatch` if either side is not a number.
    pub(crate) fn eval_compound(&self,
                                name: &str,
                                op: BinaryOperator,
                                value: &Expr,
                                env: &mut Environment)
                                -> EvalResult<Value> {
        let current = self.eval_variable(name, env)?
                          .ok_or_else(|| RuntimeError::UndefinedReference { kind: "variable",
                                                                            name: name.to_string(), })?;
        let rhs = self.eval_child(value, env, "compound assignment")?;

        let (Value::Number(a), Value::Number(b)) = (&current, &rhs) else {
            return Err(type_mismatch(op, &current, &rhs));
        };
        let updated = apply_numeric(op, *a, *b);

        env.set(name, updated.clone());
        Ok(updated)
    }

    /// Binds the host value supplied for an `import` directive.
    ///
    /// # Errors
    /// - `UndefinedReference` if the host supplied nothing under `name`.
    /// - `Cast` if a serialized value does not parse as its declared kind.
    pub(crate) fn eval_import(&self, name: &str, env: &mut Environment) -> EvalResult<()> {
        let import = self.inputs
                         .imports
                         .get(name)
                         .ok_or_else(|| RuntimeError::UndefinedReference { kind: "import",
                                                                           name: name.to_string(), })?;
        env.set(name, import.materialize()?);
        Ok(())
    }
}
