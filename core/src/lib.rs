//! # Idea Mandir Core
//!
//! Core business logic and domain layer for the Idea Mandir backend.
//! This crate contains domain entities, the email verification gateway,
//! account/content services, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Category, Feedback, Idea, OtpRecord, VerificationTicket};
pub use errors::*;
pub use repositories::{AccountRepository, FeedbackRepository, IdeaRepository};
pub use services::*;
