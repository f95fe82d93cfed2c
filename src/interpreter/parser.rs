/// Parser state and the statement loop.
///
/// Owns the work queue of token containers, the statement currently being
/// read and the function table collected while parsing.
pub mod core;

/// Binary operator parsing.
///
/// Precedence climbing over the arithmetic and relational operators, with
/// the ternary conditional as one of the levels.
pub mod binary;

/// Primary expressions.
///
/// Literals, references, calls, grouping and the postfix member access
/// chain.
pub mod primary;

/// Statement forms.
///
/// Declarations, reassignments, compound updates, `return` and the
/// `namespace`/`using`/`import` directives.
pub mod statement;

/// Bodies and the constructs that own them.
///
/// `function`, `for`, `while` and bare blocks, whose bodies are pulled from
/// the work queue up to the matching scope-close marker.
pub mod block;

/// Small helpers shared by the parsing modules.
pub mod utils;
