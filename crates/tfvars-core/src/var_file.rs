//! Path-based entry points for tests.
//!
//! Each operation comes in two forms:
//!
//! - `*_e` returns a [`Result`] for callers that want to inspect the failure,
//!   e.g. to assert that a missing key is reported as such;
//! - the plain form takes a [`TestReporter`] and stops the test on failure,
//!   so it only ever returns a usable value.
//!
//! ```no_run
//! use tfvars_core::harness::PanicReporter;
//! use tfvars_core::var_file;
//!
//! let region = var_file::get_variable_as_string_from_var_file(
//!     &PanicReporter,
//!     "terraform.tfvars",
//!     "aws_region",
//! );
//! ```

use crate::accessor;
use crate::decoder::{self, Source};
use crate::error::{DecodeError, Result};
use crate::harness::{require_ok, TestReporter};
use crate::value::AttributeMap;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

pub fn get_variable_as_string_from_var_file_e(
    path: impl AsRef<Path>,
    key: &str,
) -> Result<String> {
    let attributes = decoder::decode_file(path)?;
    Ok(accessor::get_as_string(&attributes, key)?)
}

pub fn get_variable_as_string_from_var_file(
    t: &impl TestReporter,
    path: impl AsRef<Path>,
    key: &str,
) -> String {
    require_ok(t, get_variable_as_string_from_var_file_e(path, key))
}

pub fn get_variable_as_map_from_var_file_e(
    path: impl AsRef<Path>,
    key: &str,
) -> Result<BTreeMap<String, String>> {
    let attributes = decoder::decode_file(path)?;
    Ok(accessor::get_as_map(&attributes, key)?)
}

pub fn get_variable_as_map_from_var_file(
    t: &impl TestReporter,
    path: impl AsRef<Path>,
    key: &str,
) -> BTreeMap<String, String> {
    require_ok(t, get_variable_as_map_from_var_file_e(path, key))
}

pub fn get_variable_as_list_from_var_file_e(
    path: impl AsRef<Path>,
    key: &str,
) -> Result<Vec<String>> {
    let attributes = decoder::decode_file(path)?;
    Ok(accessor::get_as_list(&attributes, key)?)
}

pub fn get_variable_as_list_from_var_file(
    t: &impl TestReporter,
    path: impl AsRef<Path>,
    key: &str,
) -> Vec<String> {
    require_ok(t, get_variable_as_list_from_var_file_e(path, key))
}

/// Decode the whole file. Only decode errors are possible here.
pub fn get_all_variables_from_var_file_e(
    path: impl AsRef<Path>,
) -> std::result::Result<AttributeMap, DecodeError> {
    decoder::decode_file(path)
}

pub fn get_all_variables_from_var_file(
    t: &impl TestReporter,
    path: impl AsRef<Path>,
) -> AttributeMap {
    require_ok(t, get_all_variables_from_var_file_e(path))
}

/// Decode the whole file into a caller-chosen type, e.g. a struct deriving
/// `Deserialize` with one field per variable.
pub fn get_all_variables_from_var_file_into_e<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> std::result::Result<T, DecodeError> {
    decoder::decode_into(Source::Path(path.as_ref()))
}

pub fn get_all_variables_from_var_file_into<T: DeserializeOwned>(
    t: &impl TestReporter,
    path: impl AsRef<Path>,
) -> T {
    require_ok(t, get_all_variables_from_var_file_into_e(path))
}
