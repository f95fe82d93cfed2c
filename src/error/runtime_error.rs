#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Operands or a condition had kinds the operation does not accept.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// A function, member field or import could not be resolved.
    UndefinedReference {
        /// What kind of thing was looked up (`function`, `field`, `import`).
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },
    /// A value was requested as a kind it does not hold.
    Cast {
        /// The kind that was requested.
        expected: &'static str,
        /// The kind the value actually holds.
        found:    &'static str,
    },
    /// An operand evaluated to no value at all.
    MissingValue {
        /// The construct that needed the value.
        context: &'static str,
    },
    /// A built-in function received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The accepted argument count.
        expected: usize,
        /// The supplied argument count.
        found:    usize,
    },
    /// A host capability reported a failure.
    Host {
        /// Details reported by the host.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}."),
            Self::UndefinedReference { kind, name } => {
                write!(f, "Undefined reference: {kind} '{name}' does not exist.")
            },
            Self::Cast { expected, found } => {
                write!(f, "Cast error: cannot read a {found} value as {expected}.")
            },
            Self::MissingValue { context } => write!(f, "Missing value in {context}."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected} arguments but received {found}."),
            Self::Host { details } => write!(f, "Host error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
