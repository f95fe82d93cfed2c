use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::host::HostObject},
};

/// Represents a runtime value in the interpreter.
///
/// Every value carries exactly one kind and a payload of that kind. Engine
/// specific kinds (vectors, colors, handles) live behind [`Value::Object`].
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, produced by string literals and concatenation.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by the relational operators and used as loop and ternary
    /// conditions.
    Boolean(bool),
    /// An opaque host value, shared by reference.
    Object(Rc<dyn HostObject>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: HostObject + 'static> From<Rc<T>> for Value {
    fn from(v: Rc<T>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    ///
    /// ## Example
    /// ```
    /// use ascent::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).kind_name(), "number");
    /// assert_eq!(Value::from("hi").kind_name(), "text");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Object(_) => "object",
        }
    }

    /// Reads the value as an `f64`.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::Cast)`: Otherwise.
    pub const fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.cast_error("number")),
        }
    }

    /// Reads the value as a `bool`.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(RuntimeError::Cast)`: Otherwise.
    pub const fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(self.cast_error("boolean")),
        }
    }

    /// Reads the value as a string slice.
    ///
    /// # Returns
    /// - `Ok(&str)`: If the value is text.
    /// - `Err(RuntimeError::Cast)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use ascent::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("hi").as_text().unwrap(), "hi");
    /// assert!(Value::Number(1.0).as_text().is_err());
    /// ```
    pub fn as_text(&self) -> EvalResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            _ => Err(self.cast_error("text")),
        }
    }

    /// Reads the value as a host object handle.
    ///
    /// # Returns
    /// - `Ok(&Rc<dyn HostObject>)`: If the value is an object.
    /// - `Err(RuntimeError::Cast)`: Otherwise.
    pub fn as_object(&self) -> EvalResult<&Rc<dyn HostObject>> {
        match self {
            Self::Object(o) => Ok(o),
            _ => Err(self.cast_error("object")),
        }
    }

    const fn cast_error(&self, expected: &'static str) -> RuntimeError {
        RuntimeError::Cast { expected,
                             found: self.kind_name() }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Object(o) => write!(f, "{o}"),
        }
    }
}
