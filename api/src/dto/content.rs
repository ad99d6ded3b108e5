use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use im_core::domain::entities::Idea;

use super::normalize;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateIdeaRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl CreateIdeaRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self
    }
}

/// Idea as listed by `/get-ideas`
#[derive(Debug, Clone, Serialize)]
pub struct IdeaDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub email: String,
}

impl From<Idea> for IdeaDto {
    fn from(idea: Idea) -> Self {
        Self {
            id: idea.id,
            title: idea.title,
            description: idea.description,
            category: idea.category.to_string(),
            email: idea.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdeaListResponse {
    pub success: bool,
    pub ideas: Vec<IdeaDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateIdeaResponse {
    pub success: bool,
    pub message: String,
    pub idea: IdeaDto,
}

/// Body of `/feedback`; the form posts its fields under `data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub data: FeedbackData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}
