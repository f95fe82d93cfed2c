use crate::error::ParseError;

/// Returns whether `c` can appear inside a numeric literal.
///
/// Literals are decimal digits with at most one decimal point and an optional
/// leading `-`. The lexer consumes every character accepted here and leaves
/// validation to [`parse_number_literal`].
#[must_use]
pub const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Converts a decimal literal into an `f64`.
///
/// Accepts an optional leading `-`, decimal digits and at most one `.`.
/// A literal consisting only of a sign or only of a decimal point is
/// rejected.
///
/// ## Errors
/// Returns `ParseError::MalformedNumber` if the literal is not a well-formed
/// decimal.
///
/// ## Example
/// ```
/// use ascent::util::num::parse_number_literal;
///
/// assert_eq!(parse_number_literal("-2.5").unwrap(), -2.5);
/// assert_eq!(parse_number_literal(".5").unwrap(), 0.5);
/// assert!(parse_number_literal("1.2.3").is_err());
/// assert!(parse_number_literal("-").is_err());
/// ```
pub fn parse_number_literal(literal: &str) -> Result<f64, ParseError> {
    let malformed = || ParseError::MalformedNumber { literal: literal.to_string() };

    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() || digits == "." {
        return Err(malformed());
    }
    if digits.chars().filter(|&c| c == '.').count() > 1
       || !digits.chars().all(is_number_char)
    {
        return Err(malformed());
    }

    let value: f64 = digits.parse().map_err(|_| malformed())?;

    Ok(if literal.starts_with('-') { -value } else { value })
}

/// Maps a number onto the boolean it stands for in a condition.
///
/// Only exactly `1` and `0` are boolean-equivalent; every other value
/// returns `None`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn boolean_equivalent(value: f64) -> Option<bool> {
    if value == 1.0 {
        Some(true)
    } else if value == 0.0 {
        Some(false)
    } else {
        None
    }
}
