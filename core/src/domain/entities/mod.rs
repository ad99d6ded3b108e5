//! Domain entities representing core business objects.

pub mod account;
pub mod feedback;
pub mod idea;
pub mod otp_record;
pub mod verification_ticket;

// Re-export commonly used types
pub use account::Account;
pub use feedback::Feedback;
pub use idea::{Category, Idea};
pub use otp_record::{OtpRecord, CODE_LENGTH};
pub use verification_ticket::VerificationTicket;
