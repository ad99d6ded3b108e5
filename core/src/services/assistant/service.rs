//! Assistant service implementation

use serde::Serialize;
use std::sync::Arc;

use crate::errors::{DomainResult, ValidationError};

use super::traits::AssistantClient;

pub const SYSTEM_PROMPT: &str = "You are a helpful design assistant, knowledgeable about graphic design, \
UI/UX principles, and creative processes. Provide thoughtful, concise responses that offer actionable \
insights. Focus on being educational rather than just giving opinions.";

pub const DEMO_ANSWER: &str = "I'm currently operating in demo mode without an API key. In production, \
I would connect to Groq's AI models to provide detailed responses to your design questions.";

pub const APOLOGY_ANSWER: &str = "I apologize, but I'm having trouble generating a response at the moment. \
This could be due to high demand or a temporary service interruption. Please try again in a few moments.";

/// Answer returned to the caller; `error` is set when the fallback was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantAnswer {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct AssistantService<C: AssistantClient + ?Sized> {
    client: Arc<C>,
}

impl<C: AssistantClient + ?Sized> AssistantService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Answer a design question
    ///
    /// Only an empty question is an error. An unconfigured client yields the
    /// demo answer and a failed completion yields the apology answer.
    pub async fn ask(&self, question: &str) -> DomainResult<AssistantAnswer> {
        if question.trim().is_empty() {
            return Err(ValidationError::RequiredField { field: "question".to_string() }.into());
        }

        if !self.client.is_configured() {
            return Ok(AssistantAnswer {
                answer: DEMO_ANSWER.to_string(),
                error: None,
            });
        }

        match self.client.complete(SYSTEM_PROMPT, question).await {
            Ok(answer) => {
                tracing::debug!(chars = answer.len(), event = "assistant_answered", "Assistant answered");
                Ok(AssistantAnswer { answer, error: None })
            }
            Err(e) => {
                tracing::error!(error = %e, event = "assistant_failed", "Assistant completion failed");
                Ok(AssistantAnswer {
                    answer: APOLOGY_ANSWER.to_string(),
                    error: Some(e),
                })
            }
        }
    }
}
