//! Error types for observable containers.

use thiserror::Error;

/// Errors surfaced by named property access on observable entities.
///
/// Collection operations never error; a failed lookup or removal reports
/// through its return value instead.
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("Entity does not serialize to an object (got {0})")]
    NotAnObject(&'static str),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Invalid value for property {property}: {message}")]
    InvalidValue { property: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EntityError {
    fn from(e: serde_json::Error) -> Self {
        EntityError::Serialization(e.to_string())
    }
}

/// Result type for entity operations.
pub type Result<T> = std::result::Result<T, EntityError>;
