/// Built-in function implementations.
///
/// The default numeric functions every runtime starts with, plus `debug`.
pub mod builtin;

/// The built-in registry and the call protocol.
///
/// Built-ins are looked up before user functions; user functions bind their
/// parameters directly into the caller's environment for the duration of
/// the call.
pub mod core;
