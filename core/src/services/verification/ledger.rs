//! In-process ledger of outstanding one-time codes

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::otp_record::OtpRecord;

/// Process-wide store mapping an identity to its outstanding code
///
/// Every operation runs under one mutex, so a `put` and a `try_consume` for
/// the same identity never interleave and a code is consumed at most once.
/// Nothing is persisted; a restart drops every outstanding code.
#[derive(Debug)]
pub struct OtpLedger {
    records: Mutex<HashMap<String, OtpRecord>>,
    ttl: Duration,
}

impl OtpLedger {
    /// Create an empty ledger whose codes live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Lifetime of a code
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // Critical sections never panic midway, so a poisoned map is still consistent
    fn lock(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `code` for `identity`, replacing any outstanding code
    pub fn put(&self, identity: &str, code: &str) -> OtpRecord {
        self.put_at(identity, code, Utc::now())
    }

    /// Same as [`put`](Self::put) with an explicit clock reading
    ///
    /// Expired records of every identity are purged on the way.
    pub fn put_at(&self, identity: &str, code: &str, now: DateTime<Utc>) -> OtpRecord {
        let ttl = self.ttl;
        let mut records = self.lock();
        records.retain(|_, record| !record.is_expired_at(ttl, now));

        let record = OtpRecord::new(identity.to_string(), code.to_string(), now);
        records.insert(identity.to_string(), record.clone());
        record
    }

    /// Consume the outstanding code for `identity` if it equals `candidate`
    ///
    /// Returns `true` and removes the record on an exact match. A missing or
    /// mismatching record yields `false` and leaves the ledger untouched; an
    /// expired record yields `false` and is evicted.
    pub fn try_consume(&self, identity: &str, candidate: &str) -> bool {
        self.try_consume_at(identity, candidate, Utc::now())
    }

    /// Same as [`try_consume`](Self::try_consume) with an explicit clock reading
    pub fn try_consume_at(&self, identity: &str, candidate: &str, now: DateTime<Utc>) -> bool {
        let mut records = self.lock();
        let Some(record) = records.get(identity) else {
            return false;
        };

        if record.is_expired_at(self.ttl, now) {
            records.remove(identity);
            return false;
        }

        if constant_time_eq(record.code.as_bytes(), candidate.as_bytes()) {
            records.remove(identity);
            true
        } else {
            false
        }
    }

    /// Remove the record for `identity` only if it still holds `code`
    ///
    /// A newer code issued in the meantime is left alone.
    pub fn discard_if_matches(&self, identity: &str, code: &str) -> bool {
        let mut records = self.lock();
        match records.get(identity) {
            Some(record) if record.code == code => {
                records.remove(identity);
                true
            }
            _ => false,
        }
    }

    /// Number of records currently held, expired ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for OtpLedger {
    fn default() -> Self {
        Self::new(Duration::minutes(10))
    }
}
