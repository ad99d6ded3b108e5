//! Shared application state
//!
//! Collaborators are held as trait objects so the binary can choose MySQL or
//! in-memory stores, SMTP or log delivery, at startup.

use std::sync::Arc;

use im_core::repositories::{AccountRepository, FeedbackRepository, IdeaRepository};
use im_core::services::account::{AccountService, PasswordHasher};
use im_core::services::assistant::{AssistantClient, AssistantService};
use im_core::services::feedback::FeedbackService;
use im_core::services::idea::IdeaService;
use im_core::services::verification::{Mailer, VerificationGateway, VerificationServiceConfig};
use im_shared::config::VerificationConfig;

pub type Gateway = VerificationGateway<dyn AccountRepository, dyn Mailer>;
pub type Accounts = AccountService<dyn AccountRepository, dyn PasswordHasher>;

/// Concrete implementations the services are built from
pub struct Collaborators {
    pub accounts: Arc<dyn AccountRepository>,
    pub ideas: Arc<dyn IdeaRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub mailer: Arc<dyn Mailer>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub assistant: Arc<dyn AssistantClient>,
}

/// Application state that holds shared services
pub struct AppState {
    pub gateway: Gateway,
    pub accounts: Accounts,
    pub ideas: IdeaService<dyn IdeaRepository>,
    pub feedback: FeedbackService<dyn FeedbackRepository>,
    pub assistant: AssistantService<dyn AssistantClient>,
    /// Include the issued code in the `/otp` response
    pub echo_code: bool,
}

impl AppState {
    pub fn new(collaborators: Collaborators, verification: &VerificationConfig) -> Self {
        let gateway = VerificationGateway::new(
            Arc::clone(&collaborators.accounts),
            collaborators.mailer,
            VerificationServiceConfig::from(verification),
        );
        let accounts = AccountService::new(collaborators.accounts, collaborators.hasher, gateway.tickets());

        Self {
            gateway,
            accounts,
            ideas: IdeaService::new(collaborators.ideas),
            feedback: FeedbackService::new(collaborators.feedback),
            assistant: AssistantService::new(collaborators.assistant),
            echo_code: verification.echo_code,
        }
    }
}
