//! Business services containing domain logic and use cases.

pub mod account;
pub mod assistant;
pub mod feedback;
pub mod idea;
pub mod verification;

pub use account::{AccountService, LoginOutcome, PasswordHasher};
pub use assistant::{AssistantAnswer, AssistantClient, AssistantService};
pub use feedback::FeedbackService;
pub use idea::{IdeaFilter, IdeaService};
pub use verification::{
    CodeIssued, Mailer, OtpLedger, TicketLedger, VerificationGateway, VerificationServiceConfig,
    VerifyOutcome,
};
