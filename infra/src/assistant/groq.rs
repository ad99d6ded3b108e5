//! Groq chat-completions client
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use im_core::services::assistant::AssistantClient;
use im_shared::config::AssistantConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Client for the Groq chat-completions API
pub struct GroqClient {
    http: Client,
    config: AssistantConfig,
}

impl GroqClient {
    pub fn new(config: AssistantConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn request_body<'a>(&'a self, system_prompt: &'a str, question: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: question },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    async fn send(&self, system_prompt: &str, question: &str) -> Result<String, InfrastructureError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("GROQ_API_KEY is not set".to_string()))?;

        let response: ChatResponse = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&self.request_body(system_prompt, question))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(first_answer(response))
    }
}

// An empty reply is not an error; the caller receives an empty answer
fn first_answer(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default()
}

#[async_trait]
impl AssistantClient for GroqClient {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn complete(&self, system_prompt: &str, question: &str) -> Result<String, String> {
        self.send(system_prompt, question).await.map_err(|e| e.to_string())
    }
}
