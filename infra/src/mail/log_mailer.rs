//! Mailer that logs instead of sending

use async_trait::async_trait;

use im_core::services::verification::Mailer;
use im_shared::utils::mask_email;

/// Development mailer used when no SMTP host is configured
///
/// The message body, which contains the code, is logged at debug level only.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, text: &str, _html: &str) -> Result<(), String> {
        tracing::warn!(
            to = %mask_email(to),
            subject = %subject,
            "SMTP not configured; email not sent"
        );
        tracing::debug!(to = %to, body = %text, "Undelivered email body");
        Ok(())
    }
}
