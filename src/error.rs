//! Error types for field construction and form submission.

use thiserror::Error;

/// Errors surfaced by the form engine.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field or form was configured incorrectly at construction time.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// One or more fields failed validation on submit.
    ///
    /// Returned, never panicked; the form stays editable afterwards.
    #[error("validation failed for: {}", fields.join(", "))]
    Validation { fields: Vec<String> },
}

impl FormError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        FormError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
