//! Assistant (hosted completion API) configuration module

use serde::{Deserialize, Serialize};

use super::{env_non_empty, env_or};

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Configuration for the hosted chat-completion API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// API key; `None` puts the assistant in demo mode
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Chat-completions endpoint
    pub api_url: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in the answer
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 800,
            timeout_secs: 30,
        }
    }
}

impl AssistantConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env_non_empty("GROQ_API_KEY"),
            api_url: env_non_empty("GROQ_API_URL").unwrap_or(defaults.api_url),
            model: env_non_empty("GROQ_MODEL").unwrap_or(defaults.model),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            timeout_secs: env_or("ASSISTANT_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
