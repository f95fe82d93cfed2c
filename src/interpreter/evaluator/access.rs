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
    /// Evaluates `target.member` through the host object's field lookup.
    ///
    /// # Errors
    /// - `Cast` if `target` is not a host object.
    /// - `UndefinedReference` if the object has no such member.
    pub(crate) fn eval_access(&self,
                              target: &Expr,
                              member: &str,
                              env: &mut Environment)
                              -> EvalResult<Value> {
        let target = self.eval_child(target, env, "member access")?;
        let object = target.as_object()?;

        object.get_field(member).ok_or_else(|| undefined_member(object.type_name(), member))
    }

    /// Evaluates `target.member = value`.
    ///
    /// The target is evaluated before the value.
    ///
    /// # Returns
    /// The written value.
    ///
    /// # Errors
    /// - `Cast` if `target` is not a host object.
    /// - `UndefinedReference` if the object rejects the write.
    pub(crate) fn eval_member_write(&self,
                                    target: &Expr,
                                    member: &str,
                                    value: &Expr,
                                    env: &mut Environment)
                                    -> EvalResult<Value> {
        let target = self.eval_child(target, env, "member write")?;
        let object = target.as_object()?;
        let value = self.eval_child(value, env, "member write")?;

        if object.set_field(member, value.clone()) {
            Ok(value)
        } else {
            Err(undefined_member(object.type_name(), member))
        }
    }
}

fn undefined_member(type_name: &str, member: &str) -> RuntimeError {
    RuntimeError::UndefinedReference { kind: "member",
                                       name: format!("{type_name}.{member}") }
}
