/// Core evaluation logic.
///
/// Declares the `Evaluator`, its dispatch over every expression kind and the
/// statement-sequence rule that the last present value wins.
pub mod core;

/// Binary operator evaluation.
///
/// Numeric arithmetic and comparison, plus the fallbacks of `+` for
/// non-numeric operands.
pub mod binary;

/// Loop evaluation.
///
/// `for` and `while`, whose body statements each run against a clone of the
/// environment that is merged back by existing key only.
pub mod loops;

/// Function calls.
///
/// The built-in registry and the user function call protocol.
pub mod function;

/// Member access.
///
/// Reads and writes of host object fields through the `HostObject` trait.
pub mod access;

/// Bindings and directives.
///
/// Declarations, reassignment, compound updates, queries, imports and the
/// `namespace`/`using` predicates.
pub mod statement;

/// Utility functions for the evaluator.
pub mod utils;
