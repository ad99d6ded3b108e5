//! Types for verification gateway results

use chrono::{DateTime, Utc};

use crate::domain::entities::verification_ticket::VerificationTicket;

/// Result of issuing and delivering a code
#[derive(Debug, Clone)]
pub struct CodeIssued {
    /// Email the code was issued for
    pub identity: String,
    /// The code that was delivered
    pub code: String,
    /// When the code stops matching
    pub expires_at: DateTime<Utc>,
}

/// Result of a verification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The code matched and was consumed; the ticket unlocks signup once
    Verified(VerificationTicket),
    /// No outstanding code matched the candidate
    Rejected,
}

impl VerifyOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified(_))
    }

    pub fn ticket(&self) -> Option<&VerificationTicket> {
        match self {
            VerifyOutcome::Verified(ticket) => Some(ticket),
            VerifyOutcome::Rejected => None,
        }
    }
}
