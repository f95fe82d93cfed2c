/// Numeric literal helpers.
///
/// This module validates and converts the decimal literals produced by the
/// lexer, and maps numbers onto the boolean-equivalent values that
/// conditions accept.
///
/// # Responsibilities
/// - Reject malformed literals (repeated signs, repeated decimal points).
/// - Convert well-formed literals into `f64`.
pub mod num;
