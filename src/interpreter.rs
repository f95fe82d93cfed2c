/// The environment model.
///
/// Variable bindings, the shared function table and the namespace
/// predicates that evaluation reads and updates.
pub mod environment;
/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the parsed expressions against an environment,
/// performs arithmetic and comparisons, runs loops and function calls, and
/// produces the script's result.
///
/// # Responsibilities
/// - Evaluates every expression kind.
/// - Applies the two environment policies: cloned per statement in loop
///   bodies, shared in function bodies.
/// - Reports runtime errors such as type mismatches or undefined functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens.
/// Whether a name is a variable, a reassignment or a call depends on the
/// declarations seen earlier in the same scan.
///
/// # Responsibilities
/// - Strips whitespace outside string literals.
/// - Classifies names against the declarations seen so far and the current
///   scope.
/// - Collects `import` and `using` directives for the host.
/// - Recovers from unrecognised characters by skipping them.
pub mod lexer;
/// The parser module builds expression trees from token containers.
///
/// # Responsibilities
/// - Converts statements into expressions by precedence climbing.
/// - Pulls the bodies of functions and loops from the statement queue.
/// - Records every declared function with its parameters.
pub mod parser;
/// Groups the flat token stream into statements and nested scopes.
pub mod splitter;
/// Prefix index of declared names, queried and extended during a scan.
pub mod trie;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum, the `HostObject` capability trait through
/// which opaque host values are accessed, and the import variables a host
/// can supply.
pub mod value;
