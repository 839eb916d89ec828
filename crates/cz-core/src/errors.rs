//! Cross-cutting error types for the console.
//!
//! Transport errors (`ApiError`) and session errors (`AuthError`) live in
//! their own crates. `cz-cli` is where they converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any `cz-*` crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation before anything was sent.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
