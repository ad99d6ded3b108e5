//! MySQL implementation of the FeedbackRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use im_core::domain::entities::feedback::Feedback;
use im_core::errors::DomainError;
use im_core::repositories::FeedbackRepository;

use super::query_failed;

pub struct MySqlFeedbackRepository {
    pool: MySqlPool,
}

impl MySqlFeedbackRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for MySqlFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let query = r#"
            INSERT INTO feedback (id, first_name, email, feedback, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(feedback.id.to_string())
            .bind(&feedback.first_name)
            .bind(&feedback.email)
            .bind(&feedback.feedback)
            .bind(feedback.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(feedback)
    }
}
