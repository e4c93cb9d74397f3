use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid value for {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// A business-rule conflict, e.g. a duplicate email on registration.
    #[error("{code}: {message}")]
    Conflict {
        code: &'static str,
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    /// Validation failure on `field` with an empty message.
    pub fn invalid(field: &'static str) -> Self {
        CoreError::Validation {
            field,
            message: String::new(),
        }
    }

    /// Validation failure on `field` with a human-readable message.
    pub fn invalid_with(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        CoreError::Forbidden(message.into())
    }
}
