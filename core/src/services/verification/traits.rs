//! Traits for code delivery

use async_trait::async_trait;

/// Delivers a message to an email address
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a message with plain-text and HTML bodies
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> Result<(), String>;
}
