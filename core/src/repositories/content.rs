//! Repository traits for ideas and feedback.

use async_trait::async_trait;

use crate::domain::entities::{Category, Feedback, Idea};
use crate::errors::DomainError;

/// Repository trait for Idea persistence operations
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Store a new idea
    async fn create(&self, idea: Idea) -> Result<Idea, DomainError>;

    /// List ideas newest first, optionally restricted to one category
    async fn list(&self, category: Option<Category>) -> Result<Vec<Idea>, DomainError>;
}

/// Repository trait for Feedback persistence operations
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Store a feedback entry
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError>;
}
