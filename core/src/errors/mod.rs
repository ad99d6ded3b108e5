//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for an internal error with a formatted message
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }

    /// Whether the error was caused by caller input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationErr(_)
                | DomainError::Auth(
                    AuthError::UserAlreadyExists | AuthError::UserNotFound | AuthError::VerificationRequired
                )
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DomainError::internal("pool closed");
        assert_eq!(err.to_string(), "Internal error: pool closed");

        let err: DomainError = AuthError::UserAlreadyExists.into();
        assert_eq!(err.to_string(), "User already exists");

        let err: DomainError = ValidationError::RequiredField { field: "email".to_string() }.into();
        assert_eq!(err.to_string(), "Field required: email");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::from(AuthError::VerificationRequired).is_client_error());
        assert!(DomainError::from(ValidationError::InvalidEmail).is_client_error());
        assert!(!DomainError::internal("db down").is_client_error());
        assert!(!DomainError::from(AuthError::DeliveryFailed { reason: "smtp".to_string() }).is_client_error());
    }
}
