//! Untyped attribute values decoded from a var file.
//!
//! The parser hands back a loosely typed tree; this module pins it down to a
//! small sum type so that every coercion matches exhaustively on the shapes a
//! var file can actually contain.

use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level attributes of one decoded source, keyed by attribute name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single decoded value. Integers and floats are kept apart so that `2`
/// renders as `"2"` rather than going through a float.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Whole numbers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    List(Vec<AttributeValue>),
    Map(BTreeMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Short shape name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Integer(_)
            | AttributeValue::Unsigned(_)
            | AttributeValue::Float(_) => "number",
            AttributeValue::String(_) => "string",
            AttributeValue::List(_) => "list",
            AttributeValue::Map(_) => "map",
        }
    }

    /// Canonical string rendering for scalars; `None` for null and composites.
    ///
    /// `f64`'s `Display` never uses exponent notation and drops the fractional
    /// part of integral values, so `2.0` renders as `"2"`.
    pub fn to_scalar_string(&self) -> Option<String> {
        match self {
            AttributeValue::String(s) => Some(s.clone()),
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Unsigned(u) => Some(u.to_string()),
            AttributeValue::Float(f) => Some(f.to_string()),
            AttributeValue::Null | AttributeValue::List(_) | AttributeValue::Map(_) => None,
        }
    }
}

impl From<hcl::Value> for AttributeValue {
    fn from(value: hcl::Value) -> Self {
        match value {
            hcl::Value::Null => AttributeValue::Null,
            hcl::Value::Bool(b) => AttributeValue::Bool(b),
            hcl::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttributeValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    AttributeValue::Unsigned(u)
                } else {
                    n.as_f64().map_or(AttributeValue::Null, AttributeValue::Float)
                }
            }
            hcl::Value::String(s) => AttributeValue::String(s),
            hcl::Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(AttributeValue::from).collect())
            }
            hcl::Value::Object(entries) => AttributeValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, AttributeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<u64> for AttributeValue {
    fn from(u: u64) -> Self {
        AttributeValue::Unsigned(u)
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}
