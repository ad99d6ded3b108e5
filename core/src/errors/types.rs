//! Error types for verification, accounts and request validation

use thiserror::Error;

/// Authentication and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Email verification required")]
    VerificationRequired,

    #[error("Failed to deliver verification code: {reason}")]
    DeliveryFailed { reason: String },
}

/// Validation errors for request input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },
}
