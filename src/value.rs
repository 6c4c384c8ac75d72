//! Typed scalar values for DFML data.
//!
//! This module provides the [`Value`] enum, the scalar payload carried by
//! data elements and node attributes. A value is one of four kinds:
//! string, integer, double, or boolean.
//!
//! ## Canonical text
//!
//! Every value has a single canonical textual form, produced by
//! [`Value::text`] (and `Display`): integers carry no leading `+` and no
//! grouping, doubles use Rust's shortest decimal rendering, booleans are
//! exactly `true`/`false`. Canonicalization happens once, at construction —
//! a double built from the literal `2.0` renders as `2`.
//!
//! ## Examples
//!
//! ```rust
//! use dfml::{Value, ValueKind};
//!
//! let v = Value::Integer(-3);
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert_eq!(v.text(), "-3");
//!
//! let v = Value::Double(2.0);
//! assert_eq!(v.text(), "2");
//! ```

use std::fmt;

/// The kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Double,
    Boolean,
}

/// A typed scalar value.
///
/// Values appear in two places in a DFML tree: as the payload of a
/// [`Data`](crate::Data) element and as the right-hand side of a node
/// attribute.
///
/// # Examples
///
/// ```rust
/// use dfml::Value;
///
/// let s = Value::from("hello");
/// let n = Value::from(40);
/// let b = Value::from(false);
///
/// assert_eq!(s.as_str(), Some("hello"));
/// assert_eq!(n.as_integer(), Some(40));
/// assert_eq!(b.as_boolean(), Some(false));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Returns the canonical textual form of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dfml::Value;
    ///
    /// assert_eq!(Value::Integer(40).text(), "40");
    /// assert_eq!(Value::Double(1.5).text(), "1.5");
    /// assert_eq!(Value::Boolean(true).text(), "true");
    /// assert_eq!(Value::String("hi".into()).text(), "hi");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if this is a string value.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns the string payload, or `None` for non-string values.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for non-integer values.
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the double payload, or `None` for non-double values.
    #[inline]
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the boolean payload, or `None` for non-boolean values.
    #[inline]
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}
