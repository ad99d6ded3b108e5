//! One-time code record held by the OTP ledger.

use chrono::{DateTime, Duration, Utc};

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Outstanding one-time code for a single identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    /// Email address the code was issued for; also the ledger key
    pub identity: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record issued at `issued_at`
    pub fn new(identity: String, code: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            identity,
            code,
            issued_at,
        }
    }

    /// Instant after which the code no longer matches
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.issued_at + ttl
    }

    /// Checks whether the record has expired at `now`
    ///
    /// A record is expired once `now` reaches `issued_at + ttl`, so a zero
    /// TTL expires immediately.
    pub fn is_expired_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now >= self.expires_at(ttl)
    }
}
