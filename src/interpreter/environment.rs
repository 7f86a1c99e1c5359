use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The single, flat variable store of a program run.
///
/// There is no nesting: blocks, loops and included files all read and write
/// the same bindings.
///
/// # Example
/// ```
/// use frog::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.set("x", Value::Int(3));
///
/// assert_eq!(env.get("x"), Some(&Value::Int(3)));
/// assert!(env.get("y").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a name up.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Returns `true` if the name has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Binds or rebinds a name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
