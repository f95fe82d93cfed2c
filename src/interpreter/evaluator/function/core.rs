use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Expr, FunctionDefinition},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::{EvalResult, Evaluator}, function::builtin},
        value::core::Value,
    },
};

/// Handler of a built-in function.
///
/// Receives the evaluated arguments, already checked against the declared
/// [`Arity`].
pub type BuiltinFn = Rc<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// Specifies the allowed number of arguments for a built-in.
///
/// - `Exact(n)` means the built-in must receive exactly `n` arguments.
/// - `Variadic` accepts any number, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

/// Defines the default built-ins as a static table of
/// `(name, arity, handler)` entries.
///
/// The macro produces `DEFAULT_BUILTINS`, from which
/// [`Builtins::default`] is populated.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static DEFAULT_BUILTINS: &[(&str, Arity, fn(&[Value]) -> EvalResult<Value>)] = &[
            $(
                ($name, $arity, $func),
            )*
        ];
    };
}

builtin_functions! {
    "sin"         => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"         => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"         => { arity: Arity::Exact(1), func: builtin::tan },
    "sqrt"        => { arity: Arity::Exact(1), func: builtin::sqrt },
    "abs"         => { arity: Arity::Exact(1), func: builtin::abs },
    "exp"         => { arity: Arity::Exact(1), func: builtin::exp },
    "int"         => { arity: Arity::Exact(1), func: builtin::int },
    "frac"        => { arity: Arity::Exact(1), func: builtin::frac },
    "sign"        => { arity: Arity::Exact(1), func: builtin::sign },
    "pow"         => { arity: Arity::Exact(2), func: builtin::pow },
    "clamp"       => { arity: Arity::Exact(3), func: builtin::clamp },
    "lerp"        => { arity: Arity::Exact(3), func: builtin::lerp },
    "bez_curve_x" => { arity: Arity::Exact(5), func: builtin::bezier },
    "bez_curve_y" => { arity: Arity::Exact(5), func: builtin::bezier },
    "debug"       => { arity: Arity::Variadic, func: builtin::debug },
}

/// A registered built-in.
#[derive(Clone)]
pub struct Builtin {
    arity: Arity,
    func:  BuiltinFn,
}

impl Builtin {
    /// The declared arity.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Checks the argument count and runs the handler.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if `args` does not satisfy the arity, or
    /// whatever the handler reports.
    pub fn call(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            let expected = match self.arity {
                Arity::Exact(n) => n,
                Arity::Variadic => args.len(),
            };
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected,
                                                             found: args.len() });
        }
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// Registry of host-supplied functions, name to handler.
///
/// Names registered here are callable from every script compiled after the
/// registration, and take precedence over user functions of the same name.
///
/// # Example
/// ```
/// use ascent::interpreter::{
///     evaluator::function::core::{Arity, Builtins},
///     value::core::Value,
/// };
///
/// let mut builtins = Builtins::default();
/// builtins.register("twice", Arity::Exact(1), |args| Ok(Value::Number(args[0].as_number()? * 2.0)));
///
/// let twice = builtins.get("twice").unwrap();
/// assert_eq!(twice.arity(), Arity::Exact(1));
/// assert_eq!(twice.call("twice", &[Value::Number(4.0)]).unwrap(), Value::Number(8.0));
/// assert!(twice.call("twice", &[]).is_err());
/// assert!(builtins.contains("sin"));
/// ```
#[derive(Debug, Clone)]
pub struct Builtins {
    table: HashMap<String, Builtin>,
}

impl Default for Builtins {
    fn default() -> Self {
        let mut builtins = Self::empty();
        for &(name, arity, func) in DEFAULT_BUILTINS {
            builtins.register(name, arity, func);
        }
        builtins
    }
}

impl Builtins {
    /// A registry with no functions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Registers `func` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F)
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        self.table.insert(name.into(),
                          Builtin { arity,
                                    func: Rc::new(func) });
    }

    /// The built-in registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.table.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right against `env`. A built-in of
    /// that name wins; otherwise the user function is called.
    ///
    /// # Returns
    /// The function result; a user function without a value-producing
    /// statement returns `0`.
    ///
    /// # Errors
    /// - `MissingValue` if an argument yields nothing.
    /// - `UndefinedReference` for an unknown function, or one whose
    ///   definition has not been evaluated yet.
    pub(crate) fn eval_call(&self,
                            name: &str,
                            arguments: &[Expr],
                            env: &mut Environment)
                            -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|argument| self.eval_child(argument, env, "function argument"))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = self.builtins.get(name) {
            return builtin.call(name, &args);
        }

        self.call_user_defined_function(name, args, env)
    }

    /// Executes a user function against the caller's environment.
    ///
    /// Each argument is bound under its parameter name directly in `env`,
    /// the body runs against `env` itself, and afterwards every parameter
    /// binding is removed again, restoring any binding it shadowed. Missing
    /// arguments leave their parameter unbound; extra arguments are ignored.
    fn call_user_defined_function(&self,
                                  name: &str,
                                  args: Vec<Value>,
                                  env: &mut Environment)
                                  -> EvalResult<Value> {
        let (params, body) = {
            let functions = env.functions().borrow();
            let FunctionDefinition { params, body } =
                functions.get(name).ok_or_else(|| RuntimeError::UndefinedReference {
                                       kind: "function",
                                       name: name.to_string(),
                                   })?;
            let body = body.clone().ok_or_else(|| RuntimeError::UndefinedReference {
                                       kind: "function body",
                                       name: name.to_string(),
                                   })?;
            (params.clone(), body)
        };

        let mut shadowed = Vec::new();
        for (param, value) in params.iter().zip(args) {
            shadowed.push((param, env.remove(param)));
            env.set(param.clone(), value);
        }

        let result = self.eval_sequence(&body, env);

        for (param, previous) in shadowed {
            match previous {
                Some(previous) => env.set(param.clone(), previous),
                None => {
                    env.remove(param);
                },
            }
        }

        Ok(result?.unwrap_or(Value::Number(0.0)))
    }

    /// Attaches `body` to the function table entry of `name`.
    pub(crate) fn attach_body(name: &str, body: &Rc<[Expr]>, env: &Environment) {
        env.functions()
           .borrow_mut()
           .entry(name.to_string())
           .or_default()
           .body = Some(Rc::clone(body));
    }
}
