use std::{cell::RefCell, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// Largest length an array may reach, through `[n]` or by writing past its
/// end.
pub const MAX_ARRAY_LEN: usize = 1 << 24;

/// A growable array shared by reference.
///
/// Cloning an `Array` clones the handle, not the elements.
///
/// # Example
/// ```
/// use frog::interpreter::value::{array::Array, core::Value};
///
/// let xs = Array::default();
/// let alias = xs.clone();
///
/// alias.set_growing(2, Value::Int(9));
///
/// assert_eq!(xs.to_string(), "[0, 0, 9]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Wraps a vector of elements.
    #[must_use]
    pub fn new(elements: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(elements)))
    }

    /// An array of `len` integer zeros.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![Value::Int(0); len])
    }

    /// A copy of the element at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Stores `value` at `index`, first padding the array with `Int(0)` up to
    /// that index if it is too short. The array never shrinks.
    pub fn set_growing(&self, index: usize, value: Value) {
        let mut elements = self.0.borrow_mut();
        if elements.len() <= index {
            elements.resize(index + 1, Value::Int(0));
        }
        elements[index] = value;
    }

    /// A snapshot of the current elements.
    #[must_use]
    pub fn elements(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Returns `true` if both handles point at the same array.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Writes the array, printing `[...]` for an array nested inside itself.
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, open: &mut Vec<Self>) -> fmt::Result {
        if open.iter().any(|outer| outer.ptr_eq(self)) {
            return f.write_str("[...]");
        }
        open.push(self.clone());

        f.write_str("[")?;
        for (i, element) in self.elements().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match element {
                Value::Array(inner) => inner.write_nested(f, open)?,
                scalar => write!(f, "{scalar}")?,
            }
        }
        f.write_str("]")?;

        open.pop();
        Ok(())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, &mut Vec::new())
    }
}
