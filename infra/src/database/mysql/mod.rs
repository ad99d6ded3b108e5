//! MySQL repository implementations

mod account_repository_impl;
mod feedback_repository_impl;
mod idea_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use feedback_repository_impl::MySqlFeedbackRepository;
pub use idea_repository_impl::MySqlIdeaRepository;

use im_core::errors::DomainError;

fn query_failed(e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Database query failed: {}", e))
}

fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, e))
}
