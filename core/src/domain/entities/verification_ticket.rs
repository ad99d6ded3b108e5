//! Single-use ticket proving that an email address was just verified.

use chrono::{DateTime, Utc};

/// Ticket handed out after a successful code match and redeemed at signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTicket {
    /// Opaque random token (hex encoded)
    pub token: String,

    /// Email address the ticket was issued for
    pub identity: String,

    /// Timestamp after which the ticket can no longer be redeemed
    pub expires_at: DateTime<Utc>,
}

impl VerificationTicket {
    /// Checks if the ticket has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
