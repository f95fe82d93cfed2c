#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during splitting or parsing.
///
/// Every variant is a format error: the source text is malformed and
/// compilation stops at the first one found.
pub enum ParseError {
    /// An expected closing delimiter (`)`, `]`, `}`) or opening `{` was not
    /// found.
    MissingDelimiter {
        /// The delimiter that was expected.
        expected: char,
        /// The construct being parsed.
        context:  &'static str,
    },
    /// A ternary conditional had no `:` separating its branches.
    MissingTernaryColon,
    /// A numeric literal could not be converted.
    MalformedNumber {
        /// The literal as it appeared in the source.
        literal: String,
    },
    /// Found a token that cannot start or continue an expression here.
    UnexpectedToken {
        /// A rendering of the offending token.
        token: String,
    },
    /// A statement ended while a construct still expected tokens.
    UnexpectedEndOfStatement {
        /// The construct being parsed.
        context: &'static str,
    },
    /// A scope body did not reach its closing marker within the iteration cap.
    BodyTooLong {
        /// The cap that was reached.
        limit: usize,
    },
    /// A function name was defined twice in one program.
    DuplicateFunction {
        /// The name of the function.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiter { expected, context } => {
                write!(f, "Format error: expected '{expected}' in {context}.")
            },
            Self::MissingTernaryColon => {
                write!(f, "Format error: expected ':' in ternary expression.")
            },
            Self::MalformedNumber { literal } => {
                write!(f, "Format error: '{literal}' is not a valid number.")
            },
            Self::UnexpectedToken { token } => write!(f, "Format error: unexpected token {token}."),
            Self::UnexpectedEndOfStatement { context } => {
                write!(f, "Format error: statement ended inside {context}.")
            },
            Self::BodyTooLong { limit } => write!(f,
                                                  "Format error: scope body exceeds {limit} items or is missing its closing '}}'."),
            Self::DuplicateFunction { name } => {
                write!(f, "Format error: function '{name}' is defined more than once.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
