//! Feedback entity submitted through the feedback form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feedback entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub first_name: String,
    pub email: String,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Creates a new Feedback entry
    pub fn new(first_name: &str, email: &str, feedback: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.trim().to_string(),
            email: email.trim().to_string(),
            feedback: feedback.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}
