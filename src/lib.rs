//! # ascent
//!
//! ascent is an embeddable scripting runtime written in Rust. It tokenizes,
//! groups, parses and evaluates small scripts against an environment of
//! variables and functions supplied by a host, with support for loops, user
//! functions, host query values, imports and opaque host objects.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::value::core::Value,
    runtime::{EvaluateOptions, HostInputs, Runtime},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a script as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one expression variant per language construct.
/// - Records user function signatures in `FunctionDefinition`.
/// - Reports whether an expression depends on host query values.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can be raised while lexing, parsing
/// or evaluating a script.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Wraps the fatal ones in a crate-level `Error`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Contains every phase of the interpreter.
///
/// # Responsibilities
/// - Coordinates all core components: trie, lexer, splitter, parser,
///   evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The host-facing runtime.
///
/// Owns the built-in registry and the compiled-program cache, and exposes
/// compilation and evaluation to the embedding application.
pub mod runtime;
/// General utilities for numeric literals and conditions.
pub mod util;

/// Evaluates `source` once with the default built-ins and no host inputs.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ascent::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("1 + 2").unwrap(), Value::Number(3.0));
/// assert_eq!(evaluate("\"a\" + \"b\"").unwrap(), Value::from("ab"));
/// assert_eq!(evaluate("function f(){} f();").unwrap(), Value::Number(0.0));
///
/// // A ternary without its `:` does not compile.
/// assert!(evaluate("1 > 0 ? 5").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let options = EvaluateOptions { cache: false,
                                    ..EvaluateOptions::default() };
    Runtime::new().evaluate(source, &HostInputs::default(), options)
                  .map(|evaluation| evaluation.value)
}
