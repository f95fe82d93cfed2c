/// Lexing diagnostics.
///
/// Describes characters that no matcher accepted. Lex errors are never
/// returned to the caller; the tokenizer logs them and skips one character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while grouping and parsing
/// tokens. Parse errors include missing delimiters, malformed literals and
/// unexpected tokens, and abort compilation of the whole source text.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unresolved references and failed value
/// casts, and abort the evaluation call that raised them.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any fatal error produced while compiling or evaluating a script.
#[derive(Debug)]
pub enum Error {
    /// Compilation failed; nothing was evaluated.
    Parse(ParseError),
    /// Evaluation failed part-way; environment side effects up to the failing
    /// statement are discarded with the call.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
