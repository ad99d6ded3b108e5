//! Configuration for the verification gateway

use chrono::Duration;
use im_shared::config::VerificationConfig;

// Upper bound for configured lifetimes (one year); chrono panics on overflow
const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration for the verification gateway
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// How long an issued code stays valid
    pub code_ttl: Duration,
    /// Upper bound for a single delivery attempt
    pub delivery_timeout: std::time::Duration,
    /// Discard the stored code when delivery fails
    pub rollback_on_delivery_failure: bool,
    /// How long a verification ticket stays redeemable
    pub ticket_ttl: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::minutes(10),
            delivery_timeout: std::time::Duration::from_secs(10),
            rollback_on_delivery_failure: false,
            ticket_ttl: Duration::minutes(15),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl: seconds(config.code_ttl_secs),
            delivery_timeout: std::time::Duration::from_secs(config.delivery_timeout_secs),
            rollback_on_delivery_failure: config.rollback_on_delivery_failure,
            ticket_ttl: seconds(config.ticket_ttl_secs),
        }
    }
}

fn seconds(secs: u64) -> Duration {
    Duration::seconds(secs.min(MAX_TTL_SECS) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shared_config() {
        let shared = VerificationConfig {
            code_ttl_secs: 300,
            delivery_timeout_secs: 5,
            rollback_on_delivery_failure: true,
            echo_code: false,
            ticket_ttl_secs: 60,
        };
        let config = VerificationServiceConfig::from(&shared);
        assert_eq!(config.code_ttl, Duration::minutes(5));
        assert_eq!(config.delivery_timeout, std::time::Duration::from_secs(5));
        assert!(config.rollback_on_delivery_failure);
        assert_eq!(config.ticket_ttl, Duration::minutes(1));
    }

    #[test]
    fn test_huge_ttl_is_capped() {
        let shared = VerificationConfig {
            code_ttl_secs: u64::MAX,
            ..VerificationConfig::default()
        };
        let config = VerificationServiceConfig::from(&shared);
        assert_eq!(config.code_ttl, Duration::seconds(MAX_TTL_SECS as i64));
    }
}
