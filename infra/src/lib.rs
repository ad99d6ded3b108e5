//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Idea Mandir backend.
//! It provides concrete implementations of the traits declared in `im_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repositories using SQLx, plus in-memory stores
//! - **Mail**: SMTP delivery via lettre, plus a logging mailer for development
//! - **Assistant**: Groq chat-completions client using reqwest
//! - **Crypto**: bcrypt password hashing
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL repositories and in-memory stores
pub mod database;

/// Mail module - code delivery
pub mod mail;

/// Assistant module - hosted chat-completion client
pub mod assistant;

/// Crypto module - password hashing
pub mod crypto;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[cfg(feature = "mysql")]
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail composition error
    #[error("Mail error: {0}")]
    Mail(String),
}
