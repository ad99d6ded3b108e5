//! Assistant module - hosted chat-completion clients

mod groq;

pub use groq::GroqClient;
