//! Scalar field values and ordered row mappings.
//!
//! This module provides the two data types everything else is built on:
//! - [`Value`] — the scalar carried in record fields, option keys, and
//!   option labels
//! - [`Row`] — an insertion-ordered, string-keyed mapping of field names to
//!   scalars, standing in for dynamic record access
//!
//! # Examples
//!
//! ```
//! use optlist::{Row, Value};
//!
//! let row = Row::new().with("id", 7).with("title", "Hello");
//!
//! assert_eq!(row.field("id"), &Value::Int(7));
//! assert_eq!(row.field("missing"), &Value::Null);
//! ```

use crate::error::OptionsError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared null returned by reference from missing-field accesses.
pub(crate) static NULL: Value = Value::Null;

/// A scalar field value.
///
/// Rows are flat: every field holds one scalar. The variant set is closed
/// under `Eq` and `Hash` so values can serve as ordered-map keys; floating
/// point numbers are not representable (see [`Value::try_from`](TryFrom)).
///
/// Values serialize untagged, so a row round-trips as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absent value. Reading a field a row does not have yields `Null`.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A text value.
    Text(String),
}

impl Value {
    /// Return the text content, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Return the integer content, if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the boolean content, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value counts as "unset" for defaulting purposes.
    ///
    /// Mirrors the loose emptiness rules of dynamic record layers: `Null`,
    /// empty text, `false`, and `0` are all empty. An alias generator uses
    /// this to decide whether a value still needs to be generated.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist::Value;
    ///
    /// assert!(Value::Null.is_empty());
    /// assert!(Value::Text(String::new()).is_empty());
    /// assert!(Value::Int(0).is_empty());
    /// assert!(!Value::Text("set".to_string()).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = OptionsError;

    /// Convert a JSON value into a scalar [`Value`].
    ///
    /// Non-integer numbers, arrays, and objects are rejected with
    /// [`OptionsError::InvalidValue`] rather than silently approximated.
    fn try_from(value: serde_json::Value) -> Result<Self, OptionsError> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .ok_or_else(|| OptionsError::InvalidValue(format!("non-integer number: {n}"))),
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            other => Err(OptionsError::InvalidValue(format!(
                "expected a scalar, found: {other}"
            ))),
        }
    }
}

/// An ordered, string-keyed mapping of field names to scalar values.
///
/// `Row` is the field-mapping view of one record: label derivation
/// functions receive it, keyed lookups return it, and
/// [`MemoryCollection`](crate::MemoryCollection) stores its records as rows.
/// Fields keep insertion order (`IndexMap` underneath), so a row serializes
/// back out in the order it was built.
///
/// Reading a field the row does not have yields [`Value::Null`] instead of
/// an error, matching the dynamic-property access of the record layers this
/// crate adapts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: IndexMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Row {
            fields: IndexMap::new(),
        }
    }

    /// Add or replace a field, consuming and returning the row.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist::{Row, Value};
    ///
    /// let row = Row::new().with("id", 1).with("name", "News");
    /// assert_eq!(row.field("name"), &Value::Text("News".to_string()));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a field in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value, or `None` if the field is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field value, reading absent fields as [`Value::Null`].
    #[must_use]
    pub fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Whether the row has a field with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>, V: Into<Value>> FromIterator<(S, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Row {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, Value>> for Row {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Row { fields }
    }
}
