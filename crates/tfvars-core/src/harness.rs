//! Glue between the fallible API and the test that is calling it.
//!
//! The fail-fast accessors never return an error: they hand it to a
//! [`TestReporter`], which stops the current test. Under `cargo test` that is
//! [`PanicReporter`]; other harnesses can plug in their own.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt::Display;
use std::path::Path;

/// Length of identifiers returned by [`unique_id`].
pub const UNIQUE_ID_LEN: usize = 6;

/// Aborts the currently running test.
pub trait TestReporter {
    /// Record `message` against the current test and stop it. Never returns.
    fn fail_now(&self, message: &str) -> !;
}

/// Reports failures by panicking, which the Rust test harness records
/// against the running test.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl TestReporter for PanicReporter {
    fn fail_now(&self, message: &str) -> ! {
        panic!("{message}")
    }
}

/// Unwrap `result`, or stop the test with the error text.
pub fn require_ok<T, E: Display>(t: &impl TestReporter, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "failing test");
            t.fail_now(&e.to_string())
        }
    }
}

/// A short random base-62 identifier, for naming fixture files such as
/// `./<id>.tfvars` without collisions between concurrently running tests.
pub fn unique_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNIQUE_ID_LEN)
        .map(char::from)
        .collect()
}

/// Write a fixture file, stopping the test if the write fails.
pub fn write_file(t: &impl TestReporter, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
    let path = path.as_ref();
    let result = std::fs::write(path, contents)
        .map_err(|e| format!("write {}: {e}", path.display()));
    require_ok(t, result)
}
