use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        environment::{Environment, FunctionTable},
        evaluator::{
            core::{EvalResult, Evaluator},
            function::core::{Arity, Builtins},
        },
        lexer::core::tokenize,
        parser::core::parse,
        splitter::split,
        value::{core::Value, import::ImportVar},
    },
};

/// Per-call switches for [`Runtime::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// Reuse the compiled program for identical source text.
    pub cache: bool,
    /// Dump tokens and expressions at `trace` level while compiling.
    pub debug: bool,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self { cache: true,
               debug: false }
    }
}

/// Values the host supplies for one evaluation call.
///
/// # Example
/// ```
/// use ascent::{
///     interpreter::value::{
///         core::Value,
///         import::{ImportKind, ImportVar},
///     },
///     runtime::HostInputs,
/// };
///
/// let inputs = HostInputs::default().with_query("time", Value::Number(2.0))
///                                   .with_import("speed",
///                                                ImportVar::serialized(ImportKind::Float, "1.5"));
///
/// assert_eq!(inputs.queries["time"], Value::Number(2.0));
/// assert!(inputs.imports.contains_key("speed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostInputs {
    /// Values read by `q.name` and `query.name`.
    pub queries: HashMap<String, Value>,
    /// Values bound by `import name-type;`.
    pub imports: HashMap<String, ImportVar>,
}

impl HostInputs {
    /// Adds a query variable.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: Value) -> Self {
        self.queries.insert(name.into(), value);
        self
    }

    /// Adds an import variable.
    #[must_use]
    pub fn with_import(mut self, name: impl Into<String>, import: ImportVar) -> Self {
        self.imports.insert(name.into(), import);
        self
    }
}

/// A compiled script.
///
/// The function table is shared by every evaluation of the program, so
/// bodies attached by one evaluation stay attached.
#[derive(Debug)]
pub struct Program {
    expressions: Vec<Expr>,
    functions:   FunctionTable,
    imports:     Vec<String>,
    usings:      Vec<String>,
}

impl Program {
    /// Top-level statements in source order.
    #[must_use]
    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    /// The function table.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// `import` directive strings, `name-type`, in source order.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// `using` directive strings in source order.
    #[must_use]
    pub fn usings(&self) -> &[String] {
        &self.usings
    }

    /// Returns `true` if no statement reads a host query value.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.expressions.iter().all(Expr::is_static)
    }

    /// A fresh environment over this program's function table.
    #[must_use]
    pub fn environment(&self) -> Environment {
        Environment::with_functions(Rc::clone(&self.functions))
    }

    /// Runs every statement against `env`.
    ///
    /// # Returns
    /// The value of the last statement that produced one, or `0`.
    ///
    /// # Errors
    /// The first `RuntimeError`; statements after it do not run.
    pub fn run(&self,
               builtins: &Builtins,
               inputs: &HostInputs,
               env: &mut Environment)
               -> EvalResult<Value> {
        let evaluator = Evaluator::new(builtins, inputs);
        let result = evaluator.eval_sequence(&self.expressions, env)?;
        Ok(result.unwrap_or(Value::Number(0.0)))
    }
}

/// The result of [`Runtime::evaluate`].
#[derive(Debug)]
pub struct Evaluation {
    /// The script's result value.
    pub value:       Value,
    /// The environment after the last statement.
    pub environment: Environment,
}

/// Compiles and evaluates scripts, caching compiled programs by source text.
///
/// # Example
/// ```
/// use ascent::runtime::{EvaluateOptions, HostInputs, Runtime};
/// use ascent::interpreter::value::core::Value;
///
/// let mut runtime = Runtime::new();
/// let source = "let x = 1; x = x + 1;";
///
/// for _ in 0..3 {
///     let evaluation = runtime.evaluate(source, &HostInputs::default(), EvaluateOptions::default())
///                             .unwrap();
///     assert_eq!(evaluation.environment.get("x"), Some(&Value::Number(2.0)));
/// }
///
/// assert_eq!(runtime.compilations(), 1);
/// assert!(runtime.invalidate(source));
/// assert!(!runtime.invalidate(source));
/// ```
#[derive(Debug, Default)]
pub struct Runtime {
    builtins:     Builtins,
    cache:        HashMap<String, Rc<Program>>,
    compilations: usize,
}

impl Runtime {
    /// A runtime with the default built-ins and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A runtime over a custom built-in registry.
    #[must_use]
    pub fn with_builtins(builtins: Builtins) -> Self {
        Self { builtins,
               ..Self::default() }
    }

    /// The built-in registry.
    #[must_use]
    pub const fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Registers a built-in and drops every cached program, since their
    /// tokens were classified without it.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F)
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        self.builtins.register(name, arity, func);
        self.clear_cache();
    }

    /// Compiles `source` without touching the cache.
    ///
    /// # Errors
    /// `Error::Parse` if any statement is malformed.
    pub fn compile(&mut self, source: &str) -> Result<Program, Error> {
        self.compile_with(source, false)
    }

    /// Returns the cached program for `source`, compiling it on a miss.
    ///
    /// # Errors
    /// `Error::Parse` if `source` does not compile; nothing is cached then.
    pub fn get_or_compile(&mut self, source: &str) -> Result<Rc<Program>, Error> {
        self.get_or_compile_with(source, false)
    }

    /// Drops the cached program for `source`.
    ///
    /// # Returns
    /// `true` if a program was cached.
    pub fn invalidate(&mut self, source: &str) -> bool {
        let removed = self.cache.remove(source).is_some();
        tracing::debug!(removed, "invalidated cached program");
        removed
    }

    /// Drops every cached program.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached programs.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Number of times source text has been compiled by this runtime.
    #[must_use]
    pub const fn compilations(&self) -> usize {
        self.compilations
    }

    /// Compiles (or fetches) and runs `source` in a fresh environment.
    ///
    /// # Errors
    /// - `Error::Parse` if `source` does not compile.
    /// - `Error::Runtime` if a statement fails; the partly updated
    ///   environment is discarded.
    pub fn evaluate(&mut self,
                    source: &str,
                    inputs: &HostInputs,
                    options: EvaluateOptions)
                    -> Result<Evaluation, Error> {
        let program = if options.cache {
            self.get_or_compile_with(source, options.debug)?
        } else {
            Rc::new(self.compile_with(source, options.debug)?)
        };

        let mut environment = program.environment();
        let value = program.run(&self.builtins, inputs, &mut environment)?;

        Ok(Evaluation { value, environment })
    }

    fn get_or_compile_with(&mut self, source: &str, debug: bool) -> Result<Rc<Program>, Error> {
        if let Some(program) = self.cache.get(source) {
            tracing::debug!("program cache hit");
            return Ok(Rc::clone(program));
        }
        tracing::debug!("program cache miss");

        let program = Rc::new(self.compile_with(source, debug)?);
        self.cache.insert(source.to_string(), Rc::clone(&program));
        Ok(program)
    }

    fn compile_with(&mut self, source: &str, debug: bool) -> Result<Program, Error> {
        self.compilations += 1;

        let tokenized = tokenize(source, self.builtins.names());
        if debug {
            for token in &tokenized.tokens {
                tracing::trace!(%token, "token");
            }
        }

        let token_count = tokenized.tokens.len();
        let parsed = parse(split(tokenized.tokens))?;
        if debug {
            for expression in &parsed.expressions {
                tracing::trace!(?expression, "expression");
            }
        }
        tracing::debug!(tokens = token_count,
                        expressions = parsed.expressions.len(),
                        functions = parsed.functions.len(),
                        "compiled program");

        Ok(Program { expressions: parsed.expressions,
                     functions:   Rc::new(RefCell::new(parsed.functions)),
                     imports:     tokenized.imports,
                     usings:      tokenized.usings, })
    }
}
