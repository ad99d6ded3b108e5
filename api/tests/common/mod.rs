//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use im_api::{AppState, Collaborators};
use im_core::services::assistant::AssistantClient;
use im_core::services::verification::Mailer;
use im_infra::crypto::BcryptHasher;
use im_infra::database::{InMemoryAccountRepository, InMemoryFeedbackRepository, InMemoryIdeaRepository};
use im_shared::config::{AppConfig, VerificationConfig};

/// Mailer that records messages and can be told to fail
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Six-digit code from the latest message sent to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(recipient, _)| recipient == to)
            .and_then(|(_, text)| {
                text.split_whitespace()
                    .find(|w| w.len() == 6 && w.bytes().all(|b| b.is_ascii_digit()))
                    .map(str::to_string)
            })
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, _subject: &str, text: &str, _html: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push((to.to_string(), text.to_string()));
        if self.fail {
            Err("SMTP connection refused".to_string())
        } else {
            Ok(())
        }
    }
}

/// Assistant that is either unconfigured or always fails
pub struct StubAssistant {
    pub configured: bool,
    pub reply: Result<String, String>,
}

#[async_trait]
impl AssistantClient for StubAssistant {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, _system_prompt: &str, _question: &str) -> Result<String, String> {
        self.reply.clone()
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub mailer: Arc<RecordingMailer>,
    pub feedback: Arc<InMemoryFeedbackRepository>,
    pub config: AppConfig,
}

pub fn context_with(mailer: RecordingMailer, assistant: StubAssistant, verification: VerificationConfig) -> TestContext {
    let mailer = Arc::new(mailer);
    let feedback = Arc::new(InMemoryFeedbackRepository::new());
    let collaborators = Collaborators {
        accounts: Arc::new(InMemoryAccountRepository::new()),
        ideas: Arc::new(InMemoryIdeaRepository::new()),
        feedback: feedback.clone(),
        mailer: mailer.clone(),
        hasher: Arc::new(BcryptHasher::new(4)),
        assistant: Arc::new(assistant),
    };
    let config = AppConfig {
        verification: verification.clone(),
        ..AppConfig::default()
    };

    TestContext {
        state: web::Data::new(AppState::new(collaborators, &verification)),
        mailer,
        feedback,
        config,
    }
}

pub fn context() -> TestContext {
    context_with(
        RecordingMailer::default(),
        StubAssistant {
            configured: false,
            reply: Ok(String::new()),
        },
        VerificationConfig::default(),
    )
}
