//! Feedback submission

use std::sync::Arc;

use im_shared::utils::{is_valid_email, mask_email};

use crate::domain::entities::feedback::Feedback;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::content::FeedbackRepository;

pub struct FeedbackService<R: FeedbackRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: FeedbackRepository + ?Sized> FeedbackService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a feedback entry
    pub async fn submit(&self, first_name: &str, email: &str, feedback: &str) -> DomainResult<Feedback> {
        for (field, value) in [("firstName", first_name), ("email", email), ("feedback", feedback)] {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredField { field: field.to_string() }.into());
            }
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let stored = self.repository.create(Feedback::new(first_name, email, feedback)).await?;
        tracing::info!(email = %mask_email(email), event = "feedback_received", "Feedback stored");
        Ok(stored)
    }
}
