//! Mail transport configuration module

use serde::{Deserialize, Serialize};

use super::{env_non_empty, env_or};

/// SMTP configuration used to deliver one-time codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP port (STARTTLS)
    pub smtp_port: u16,

    /// SMTP username, also used as the sender address
    pub username: String,

    /// SMTP password or app password
    #[serde(skip_serializing)]
    pub password: String,

    /// Display name used in the `From` header
    pub from_name: String,

    /// Transport timeout in seconds
    pub timeout_secs: u64,
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// Returns `None` unless `SMTP_HOST` is set; without it codes are only
    /// written to the log.
    pub fn from_env() -> Option<Self> {
        let smtp_host = env_non_empty("SMTP_HOST")?;
        Some(Self {
            smtp_host,
            smtp_port: env_or("SMTP_PORT", 587),
            username: env_non_empty("SMTP_USERNAME")
                .or_else(|| env_non_empty("EMAIL"))
                .unwrap_or_default(),
            password: env_non_empty("SMTP_PASSWORD").unwrap_or_default(),
            from_name: env_non_empty("MAIL_FROM_NAME").unwrap_or_else(|| "Idea Mandir".to_string()),
            timeout_secs: env_or("SMTP_TIMEOUT_SECS", 10),
        })
    }

    /// Formatted `From` mailbox, e.g. `Idea Mandir <team@example.com>`
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.username)
    }
}
