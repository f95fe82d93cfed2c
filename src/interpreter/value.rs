/// Host object capabilities.
///
/// Defines the `HostObject` trait through which opaque host values expose
/// member reads, member writes and a host-defined addition. The portable core
/// never inspects a host value except through this trait.
pub mod host;
/// Import variables.
///
/// Declares the `ImportVar` values a host supplies for `import` directives,
/// either as serialized text with a declared kind or as a live host object.
pub mod import;

pub mod core;
