//! Email verification module for account registration
//!
//! This module provides the one-time code workflow that gates signup:
//! - Code generation from the OS random number generator
//! - The OTP ledger (one outstanding code per email, single use, expiring)
//! - Code delivery through a `Mailer`
//! - Verification tickets that bind a successful match to account creation

mod config;
mod gateway;
mod generator;
mod ledger;
mod template;
mod ticket;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use gateway::VerificationGateway;
pub use generator::{generate_code, is_well_formed};
pub use ledger::OtpLedger;
pub use template::CodeEmail;
pub use ticket::TicketLedger;
pub use traits::Mailer;
pub use types::{CodeIssued, VerifyOutcome};
