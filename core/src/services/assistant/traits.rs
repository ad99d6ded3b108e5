use async_trait::async_trait;

/// Client for a hosted chat-completion model
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Whether credentials are available; without them the service answers in demo mode
    fn is_configured(&self) -> bool;

    /// Ask `question` under `system_prompt` and return the model's reply
    async fn complete(&self, system_prompt: &str, question: &str) -> Result<String, String>;
}
