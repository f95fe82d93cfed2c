use std::{any::Any, fmt};

use crate::interpreter::value::core::Value;

/// The capability surface of an opaque host value.
///
/// Hosts wrap their own types (vectors, colors, scene handles) in a type that
/// implements this trait and hand them to scripts as [`Value::Object`].
/// Member access (`a.b`), member writes (`a.b = v`) and the `+` fallback are
/// resolved exclusively through these methods.
///
/// Objects are shared by reference, so `set_field` takes `&self`;
/// implementations use interior mutability for writable state.
///
/// # Example
/// ```
/// use std::{any::Any, cell::Cell, fmt, rc::Rc};
///
/// use ascent::interpreter::value::{core::Value, host::HostObject};
///
/// #[derive(Debug)]
/// struct Counter(Cell<f64>);
///
/// impl fmt::Display for Counter {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "Counter({})", self.0.get())
///     }
/// }
///
/// impl HostObject for Counter {
///     fn type_name(&self) -> &str {
///         "Counter"
///     }
///
///     fn get_field(&self, name: &str) -> Option<Value> {
///         (name == "value").then(|| Value::Number(self.0.get()))
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let counter: Value = Rc::new(Counter(Cell::new(3.0))).into();
/// let field = counter.as_object().unwrap().get_field("value");
/// assert_eq!(field, Some(Value::Number(3.0)));
/// ```
pub trait HostObject: fmt::Debug + fmt::Display {
    /// The host type name, used in error messages.
    fn type_name(&self) -> &str;

    /// Reads a named field or property.
    ///
    /// Returns `None` when the type has no member with this name.
    fn get_field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Writes a named field or property.
    ///
    /// Returns `false` when the type has no writable member with this name.
    fn set_field(&self, _name: &str, _value: Value) -> bool {
        false
    }

    /// Attempts a host-defined addition with `self` as the left operand.
    ///
    /// Returns `None` when the type defines no addition for this right
    /// operand, in which case `+` falls back to text concatenation.
    fn try_add(&self, _rhs: &Value) -> Option<Value> {
        None
    }

    /// Gives hosts a way to downcast back to their concrete type.
    fn as_any(&self) -> &dyn Any;
}
