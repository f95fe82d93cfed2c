use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{ast::FunctionDefinition, interpreter::value::core::Value};

/// Function table shared by every environment derived from one program.
pub type FunctionTable = Rc<RefCell<HashMap<String, FunctionDefinition>>>;

/// Mutable state threaded through evaluation.
///
/// Cloning deep-copies `variables` and `predicates` but shares `functions`,
/// so a body attached inside a loop clone stays attached for the whole
/// program.
///
/// # Example
/// ```
/// use ascent::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::default();
/// env.set("x", Value::Number(1.0));
///
/// let mut copy = env.clone();
/// copy.set("x", Value::Number(2.0));
///
/// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
/// assert!(env.shares_functions_with(&copy));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables:  HashMap<String, Value>,
    functions:  FunctionTable,
    predicates: Vec<String>,
}

impl Environment {
    /// Creates an environment over an existing function table.
    #[must_use]
    pub fn with_functions(functions: FunctionTable) -> Self {
        Self { variables: HashMap::new(),
               functions,
               predicates: Vec::new() }
    }

    /// Value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Removes the binding of `name` and returns it.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// All bindings.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    /// The shared function table.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Namespace and using predicates in insertion order.
    #[must_use]
    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    /// Appends `predicate` unless it is already present.
    pub fn add_predicate(&mut self, predicate: &str) {
        if !self.predicates.iter().any(|p| p == predicate) {
            self.predicates.push(predicate.to_string());
        }
    }

    /// Copies back from `scratch` the bindings of every name bound in `self`.
    ///
    /// Names that only exist in `scratch` are dropped and names `scratch`
    /// no longer binds keep their current value.
    pub fn merge_existing(&mut self, scratch: &Self) {
        for (name, value) in &mut self.variables {
            if let Some(updated) = scratch.variables.get(name) {
                value.clone_from(updated);
            }
        }
    }

    /// Returns `true` if both environments use the same function table.
    #[must_use]
    pub fn shares_functions_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.functions, &other.functions)
    }
}
