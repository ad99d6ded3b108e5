//! Repository interfaces for persisted accounts and content.
//!
//! Implementations live in the infrastructure crate (MySQL and in-memory).

pub mod account;
pub mod content;

pub use account::AccountRepository;
pub use content::{FeedbackRepository, IdeaRepository};
