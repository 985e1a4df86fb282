//! Error types for the Benefia system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenefiaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Permission denied: {reason}")]
    PermissionDenied { reason: String },

    #[error("Selection window is closed for group {group_id}")]
    SelectionWindowClosed { group_id: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BenefiaResult<T> = Result<T, BenefiaError>;

impl BenefiaError {
    /// Shorthand for a [`BenefiaError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
