//! Single-use verification tickets

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::verification_ticket::VerificationTicket;

const TOKEN_BYTES: usize = 32;

/// Store of tickets issued after a successful code match
///
/// A ticket is redeemable once, only for the identity it was issued for and
/// only before it expires.
#[derive(Debug)]
pub struct TicketLedger {
    tickets: Mutex<HashMap<String, VerificationTicket>>,
    ttl: Duration,
}

impl TicketLedger {
    /// Create an empty ticket ledger whose tickets live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            tickets: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, VerificationTicket>> {
        self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a fresh ticket for `identity`
    pub fn issue(&self, identity: &str) -> VerificationTicket {
        self.issue_at(identity, Utc::now())
    }

    /// Same as [`issue`](Self::issue) with an explicit clock reading
    pub fn issue_at(&self, identity: &str, now: DateTime<Utc>) -> VerificationTicket {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        let ticket = VerificationTicket {
            token: hex::encode(bytes),
            identity: identity.to_string(),
            expires_at: now + self.ttl,
        };

        let mut tickets = self.lock();
        tickets.retain(|_, t| !t.is_expired_at(now));
        tickets.insert(ticket.token.clone(), ticket.clone());
        ticket
    }

    /// Redeem `token` for `identity`, consuming it on success
    pub fn redeem(&self, token: &str, identity: &str) -> bool {
        self.redeem_at(token, identity, Utc::now())
    }

    /// Same as [`redeem`](Self::redeem) with an explicit clock reading
    pub fn redeem_at(&self, token: &str, identity: &str, now: DateTime<Utc>) -> bool {
        let mut tickets = self.lock();
        let Some(ticket) = tickets.get(token) else {
            return false;
        };

        if ticket.is_expired_at(now) {
            tickets.remove(token);
            return false;
        }
        if ticket.identity != identity {
            return false;
        }

        tickets.remove(token);
        true
    }

    /// Number of tickets currently held
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no tickets are held
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
