//! Typed lookups over a decoded [`AttributeMap`].
//!
//! Every accessor goes through [`get`] and then coerces by matching on the
//! value's shape. Only scalars (strings, numbers, booleans) coerce to a
//! string, and maps and lists only coerce when all their members are scalars.
//! Nothing is flattened or defaulted.

use crate::error::{AccessError, Shape};
use crate::value::{AttributeMap, AttributeValue};
use std::collections::BTreeMap;

/// Look up `key` without coercing it.
pub fn get<'a>(
    attributes: &'a AttributeMap,
    key: &str,
) -> Result<&'a AttributeValue, AccessError> {
    tracing::trace!(key, "looking up attribute");
    attributes.get(key).ok_or_else(|| AccessError::KeyNotFound {
        key: key.to_string(),
    })
}

/// Look up `key` and render it as a string.
///
/// Strings come back verbatim; numbers and booleans use their canonical
/// rendering (`2`, `2.5`, `true`).
pub fn get_as_string(attributes: &AttributeMap, key: &str) -> Result<String, AccessError> {
    scalar_to_string(key, get(attributes, key)?)
}

/// Look up `key` and coerce it to a map of strings.
pub fn get_as_map(
    attributes: &AttributeMap,
    key: &str,
) -> Result<BTreeMap<String, String>, AccessError> {
    match get(attributes, key)? {
        AttributeValue::Map(entries) => entries
            .iter()
            .map(|(name, value)| {
                let rendered = scalar_to_string(&format!("{key}.{name}"), value)?;
                Ok((name.clone(), rendered))
            })
            .collect(),
        other => Err(wrong_type(key, Shape::Map, other)),
    }
}

/// Look up `key` and coerce it to a list of strings, keeping source order.
pub fn get_as_list(attributes: &AttributeMap, key: &str) -> Result<Vec<String>, AccessError> {
    match get(attributes, key)? {
        AttributeValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| scalar_to_string(&format!("{key}[{i}]"), item))
            .collect(),
        other => Err(wrong_type(key, Shape::List, other)),
    }
}

fn scalar_to_string(path: &str, value: &AttributeValue) -> Result<String, AccessError> {
    value
        .to_scalar_string()
        .ok_or_else(|| wrong_type(path, Shape::String, value))
}

fn wrong_type(path: &str, expected: Shape, found: &AttributeValue) -> AccessError {
    AccessError::WrongType {
        key: path.to_string(),
        expected,
        found: found.kind(),
    }
}
