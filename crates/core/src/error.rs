//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (client input, response shape).
/// Transport and auth concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required request field was absent.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The request body could not be read as a JSON object.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// An upstream payload did not have the expected structure.
    #[error("unexpected upstream response: {0}")]
    UnexpectedShape(String),
}

impl DomainError {
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn unexpected_shape(msg: impl Into<String>) -> Self {
        Self::UnexpectedShape(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_the_field() {
        let err = DomainError::MissingField("due_date");
        assert_eq!(err.to_string(), "Missing field: due_date");
    }

    #[test]
    fn invalid_body_message_is_prefixed() {
        let err = DomainError::invalid_body("expected a JSON object");
        assert_eq!(err.to_string(), "Invalid JSON body: expected a JSON object");
    }
}
