//! Design assistant backed by a hosted chat-completion model

mod service;
mod traits;

pub use service::{AssistantAnswer, AssistantService, APOLOGY_ANSWER, DEMO_ANSWER, SYSTEM_PROMPT};
pub use traits::AssistantClient;
