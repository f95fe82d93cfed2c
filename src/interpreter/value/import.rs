use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, host::HostObject},
    },
};

/// The declared kind of a serialized import variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Parsed as a decimal number.
    Float,
    /// Used verbatim.
    String,
    /// Parsed as `true` or `false`.
    Bool,
}

impl ImportKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Float => "number",
            Self::String => "text",
            Self::Bool => "boolean",
        }
    }
}

/// A host value that an `import name-type;` directive materializes.
#[derive(Debug, Clone)]
pub enum ImportVar {
    /// A value stored as text, converted according to its declared kind every
    /// time it is imported.
    Serialized {
        /// How to interpret `raw`.
        kind: ImportKind,
        /// The stored text.
        raw:  String,
    },
    /// A live host object, imported by reference.
    Object(Rc<dyn HostObject>),
}

impl ImportVar {
    /// Creates a serialized import variable.
    #[must_use]
    pub fn serialized(kind: ImportKind, raw: impl Into<String>) -> Self {
        Self::Serialized { kind,
                           raw: raw.into() }
    }

    /// Converts the import into a runtime value.
    ///
    /// # Errors
    /// Returns `RuntimeError::Cast` if serialized text does not parse as its
    /// declared kind.
    ///
    /// # Example
    /// ```
    /// use ascent::interpreter::value::{
    ///     core::Value,
    ///     import::{ImportKind, ImportVar},
    /// };
    ///
    /// let speed = ImportVar::serialized(ImportKind::Float, "2.5");
    /// assert_eq!(speed.materialize().unwrap(), Value::Number(2.5));
    ///
    /// let broken = ImportVar::serialized(ImportKind::Bool, "maybe");
    /// assert!(broken.materialize().is_err());
    /// ```
    pub fn materialize(&self) -> EvalResult<Value> {
        match self {
            Self::Serialized { kind, raw } => {
                let cast_error = || RuntimeError::Cast { expected: kind.name(),
                                                         found:    "text" };
                match kind {
                    ImportKind::Float => {
                        raw.trim().parse::<f64>().map(Value::Number).map_err(|_| cast_error())
                    },
                    ImportKind::String => Ok(Value::Text(raw.clone())),
                    ImportKind::Bool => {
                        raw.trim().parse::<bool>().map(Value::Boolean).map_err(|_| cast_error())
                    },
                }
            },
            Self::Object(object) => Ok(Value::Object(Rc::clone(object))),
        }
    }
}
