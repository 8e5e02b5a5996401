//! Error types for decoding var files and coercing their attributes.

use std::fmt;
use std::io;
use thiserror::Error;

/// The shape a caller asked an attribute to be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    List,
    Map,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::String => "string",
            Shape::List => "list",
            Shape::Map => "map",
        })
    }
}

/// Errors produced while turning a configuration source into an attribute map.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be opened. The OS message is passed through as-is.
    #[error("open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The source was read but is not valid HCL.
    ///
    /// Rendered as `<source_id> - <message>`; only that prefix is stable,
    /// the message comes straight from the parser.
    #[error("{source_id} - {message}")]
    Parse { source_id: String, message: String },
}

impl DecodeError {
    pub(crate) fn parse(source_id: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_id: source_id.into(),
            message: message.to_string(),
        }
    }
}

/// Errors produced while looking up and coercing a single attribute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("key \"{key}\" not found")]
    KeyNotFound { key: String },

    /// `key` is the path of the offending value, e.g. `tags.inner` or `list[1]`.
    #[error("value of \"{key}\" is a {found}, expected a {expected}")]
    WrongType {
        key: String,
        expected: Shape,
        found: &'static str,
    },
}

impl AccessError {
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, AccessError::KeyNotFound { .. })
    }

    pub fn is_wrong_type(&self) -> bool {
        matches!(self, AccessError::WrongType { .. })
    }
}

/// Umbrella error for the path-based var file API.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

impl Error {
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::Access(e) if e.is_key_not_found())
    }

    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::Access(e) if e.is_wrong_type())
    }
}

/// Convenience alias used throughout tfvars-core.
pub type Result<T> = std::result::Result<T, Error>;
