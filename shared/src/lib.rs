//! Shared utilities and common types for the Idea Mandir server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response structure returned by the API
//! - Utility functions (email validation and masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AssistantConfig, CorsConfig, DatabaseConfig, Environment, MailConfig,
    ServerConfig, VerificationConfig,
};
pub use errors::ErrorResponse;
pub use utils::email;
