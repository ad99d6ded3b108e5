//! SMTP mailer using lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use std::time::Duration;

use im_core::services::verification::Mailer;
use im_shared::config::MailConfig;
use im_shared::utils::mask_email;

use crate::InfrastructureError;

// Port using implicit TLS; every other port negotiates STARTTLS
const SMTPS_PORT: u16 = 465;

/// Sends mail through an authenticated SMTP relay
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config
            .from_mailbox()
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let relay = if config.smtp_port == SMTPS_PORT {
            SmtpTransport::relay(&config.smtp_host)
        } else {
            SmtpTransport::starttls_relay(&config.smtp_host)
        };
        let builder =
            relay.map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP mailer initialized"
        );

        Ok(Self { transport, from })
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> Result<Message, InfrastructureError> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.to_string()),
                    ),
            )
            .map_err(|e| InfrastructureError::Mail(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> Result<(), String> {
        let message = self.build_message(to, subject, text, html).map_err(|e| e.to_string())?;

        // lettre's SmtpTransport is blocking
        let transport = self.transport.clone();
        let result = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| format!("Mail task failed: {}", e))?;

        match result {
            Ok(_) => {
                tracing::info!(to = %mask_email(to), "Email sent successfully");
                Ok(())
            }
            Err(e) => {
                tracing::error!(to = %mask_email(to), error = %e, "Failed to send email");
                Err(e.to_string())
            }
        }
    }
}
