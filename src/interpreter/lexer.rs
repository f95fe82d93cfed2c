/// Token definitions.
///
/// Declares the closed `TokenKind` enumeration and the immutable `Token`
/// (kind plus lexeme) that every later phase consumes.
pub mod token;
/// Context-free lexemes.
///
/// A `logos` lexer for the lexemes whose classification never depends on
/// earlier declarations: punctuation, operators, numeric and string literals.
pub mod symbol;
/// Character stream cursor.
///
/// A copyable position over the whitespace-stripped source. Copies are used
/// for speculative scans; the committing scan advances the original.
pub mod cursor;
/// Category matchers.
///
/// The ordered list of matchers the tokenizer tries at every position, each
/// with a speculative match test and a committing scan.
pub mod matcher;

pub mod core;
