//! HCL decoder — turns a var file into an [`AttributeMap`].
//!
//! Parsing itself is delegated to the `hcl` crate. This module owns the parts
//! around it that callers rely on:
//!
//! - **Error prefixing**: every syntax error is rendered as
//!   `<source> - <parser message>`, where `<source>` is the path as given or
//!   [`BYTES_SOURCE_ID`] for in-memory input. The parser message is opaque.
//! - **Open errors** are not prefixed; they render as `open <path>: <os error>`.
//! - **Duplicate top-level attributes** are rejected instead of letting one
//!   silently win.
//!
//! Blocks (`name { ... }`) are passed through as nested maps, the same way
//! the parser renders them.

use crate::error::DecodeError;
use crate::value::{AttributeMap, AttributeValue};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Source identifier used in error messages for in-memory input.
pub const BYTES_SOURCE_ID: &str = "<bytes>";

/// Where configuration text comes from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl Source<'_> {
    /// The identifier that prefixes parse errors for this source.
    pub fn id(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Bytes(_) => BYTES_SOURCE_ID.to_string(),
        }
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Source::Path(path)
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

/// Decode a configuration source into its top-level attributes.
pub fn decode(source: Source<'_>) -> Result<AttributeMap, DecodeError> {
    let raw: BTreeMap<String, hcl::Value> = decode_into(source)?;
    let attributes: AttributeMap = raw
        .into_iter()
        .map(|(key, value)| (key, AttributeValue::from(value)))
        .collect();

    tracing::debug!(
        source = %source.id(),
        attributes = attributes.len(),
        "decoded var file"
    );
    Ok(attributes)
}

/// Decode a var file on disk.
pub fn decode_file(path: impl AsRef<Path>) -> Result<AttributeMap, DecodeError> {
    decode(Source::Path(path.as_ref()))
}

/// Decode in-memory configuration text.
pub fn decode_bytes(bytes: impl AsRef<[u8]>) -> Result<AttributeMap, DecodeError> {
    decode(Source::Bytes(bytes.as_ref()))
}

/// Decode a configuration source straight into a caller-supplied type.
///
/// Shares the error contract of [`decode`], including duplicate rejection.
pub fn decode_into<T: DeserializeOwned>(source: Source<'_>) -> Result<T, DecodeError> {
    let id = source.id();
    read_text(source)
        .and_then(|text| parse_body(&id, &text))
        .and_then(|body| hcl::from_body(body).map_err(|e| DecodeError::parse(&id, e)))
        .inspect_err(|e| tracing::debug!(source = %id, error = %e, "failed to decode var file"))
}

/// Read the whole source as UTF-8. The file handle never outlives this call.
fn read_text(source: Source<'_>) -> Result<String, DecodeError> {
    match source {
        Source::Path(path) => {
            let bytes = std::fs::read(path).map_err(|source| DecodeError::Open {
                path: path.display().to_string(),
                source,
            })?;
            String::from_utf8(bytes)
                .map_err(|e| DecodeError::parse(path.display().to_string(), e))
        }
        Source::Bytes(bytes) => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| DecodeError::parse(BYTES_SOURCE_ID, e)),
    }
}

fn parse_body(id: &str, text: &str) -> Result<hcl::Body, DecodeError> {
    let body = hcl::parse(text).map_err(|e| DecodeError::parse(id, e))?;
    reject_duplicates(id, &body)?;
    Ok(body)
}

/// Attribute names must be unique, and no block may share a name with an
/// attribute. Repeated blocks are fine; the parser collects them into a list.
fn reject_duplicates(id: &str, body: &hcl::Body) -> Result<(), DecodeError> {
    let mut attributes = BTreeSet::new();
    for attribute in body.attributes() {
        if !attributes.insert(attribute.key()) {
            return Err(DecodeError::parse(
                id,
                format!("duplicate attribute \"{}\"", attribute.key()),
            ));
        }
    }
    for block in body.blocks() {
        if attributes.contains(block.identifier()) {
            return Err(DecodeError::parse(
                id,
                format!("block \"{}\" redeclares an attribute", block.identifier()),
            ));
        }
    }
    Ok(())
}
