//! Cross-cutting error types for Vigia.
//!
//! Domain-specific errors (e.g. `ClientError`, `ConfigError`) are defined in
//! their respective crates. The two converge in `vigia-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Vigia crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name one of the closed accident categories.
    #[error("Unknown accident category: {0}")]
    UnknownAccidentType(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
