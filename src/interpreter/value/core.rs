use std::fmt;

use crate::interpreter::value::array::Array;

/// A runtime value.
///
/// Every expression evaluates to one of these. Scalars are copied on
/// assignment; arrays are shared, so two names bound to the same array see
/// each other's writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Real(f64),
    /// An owned string.
    Str(String),
    /// `true` or `false`. Produced by comparisons and boolean literals.
    Boolean(bool),
    /// A growable, shared array.
    Array(Array),
    /// The value of a declared scalar that has not been assigned yet.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Array::new(v))
    }
}

impl Value {
    /// The upper-case type name used in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use frog::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Int(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from("x").type_name(), "STRING");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INTEGER",
            Self::Real(_) => "REAL",
            Self::Str(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Array(_) => "ARRAY",
            Self::Null => "NULL",
        }
    }

    /// Only `false` and `Null` are falsy. `0`, `0.0`, `""` and empty arrays
    /// are all truthy.
    ///
    /// # Example
    /// ```
    /// use frog::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

/// The form `FRG_Print` writes: reals with six decimals, arrays as
/// `[a, b]`, strings without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:.6}"),
            Self::Str(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(a) => write!(f, "{a}"),
            Self::Null => f.write_str("null"),
        }
    }
}
