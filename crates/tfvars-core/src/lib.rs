//! # tfvars-core
//!
//! Read typed values out of Terraform variable files (`*.tfvars`, HCL syntax)
//! from infrastructure tests.
//!
//! A var file is decoded once into an untyped [`AttributeMap`], then single
//! keys are coerced into the shape the test needs: a string, a list of
//! strings or a map of strings. Coercion is strict. A list is never rendered
//! as a string, and a map holding another map is an error rather than being
//! flattened.
//!
//! ## Quick start
//!
//! ```rust
//! use tfvars_core::{decode_bytes, get_as_list, get_as_map, get_as_string};
//!
//! let vars = decode_bytes(
//!     r#"
//!     aws_region   = "us-east-2"
//!     number_type  = 2
//!     boolean_type = true
//!     tags = {
//!       foo = "bar"
//!     }
//!     list = ["item1"]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(get_as_string(&vars, "aws_region").unwrap(), "us-east-2");
//! assert_eq!(get_as_string(&vars, "number_type").unwrap(), "2");
//! assert_eq!(get_as_string(&vars, "boolean_type").unwrap(), "true");
//! assert_eq!(get_as_list(&vars, "list").unwrap(), vec!["item1"]);
//! assert_eq!(get_as_map(&vars, "tags").unwrap()["foo"], "bar");
//! assert!(get_as_string(&vars, "tags").unwrap_err().is_wrong_type());
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — configuration text or file → [`AttributeMap`]
//! - [`accessor`] — key lookup and string/list/map coercion
//! - [`var_file`] — path-based API, fallible (`*_e`) and fail-fast pairs
//! - [`harness`] — [`TestReporter`], fixture names and fixture writing
//! - [`value`] — the [`AttributeValue`] sum type
//! - [`error`] — error types for decoding and access

pub mod accessor;
pub mod decoder;
pub mod error;
pub mod harness;
pub mod value;
pub mod var_file;

pub use accessor::{get, get_as_list, get_as_map, get_as_string};
pub use decoder::{decode, decode_bytes, decode_file, decode_into, Source};
pub use error::{AccessError, DecodeError, Error, Result, Shape};
pub use harness::{PanicReporter, TestReporter};
pub use value::{AttributeMap, AttributeValue};
