//! Error conversion helpers for output writes
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to a failed write.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", edge).write_context("tree edge")?;
    /// ```
    fn write_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn write_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Write {
            context: context.to_string(),
            source,
        })
    }
}
