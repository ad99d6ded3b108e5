//! One-time code verification configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, Environment};

/// Lifetimes and policies for one-time codes and verification tickets
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds a code stays valid after issuance
    pub code_ttl_secs: u64,

    /// Upper bound for a single delivery attempt, in seconds
    pub delivery_timeout_secs: u64,

    /// Drop the stored code when delivery fails
    pub rollback_on_delivery_failure: bool,

    /// Include the code in the `/otp` response body
    pub echo_code: bool,

    /// Seconds a verification ticket stays redeemable
    pub ticket_ttl_secs: u64,
}

impl VerificationConfig {
    /// Defaults for the given environment
    ///
    /// Codes are echoed back to the client only in development.
    pub fn for_environment(env: Environment) -> Self {
        Self {
            code_ttl_secs: 600,
            delivery_timeout_secs: 10,
            rollback_on_delivery_failure: false,
            echo_code: env.is_development(),
            ticket_ttl_secs: 900,
        }
    }

    /// Create from environment variables
    pub fn from_env(env: Environment) -> Self {
        let defaults = Self::for_environment(env);
        Self {
            code_ttl_secs: env_or("OTP_TTL_SECS", defaults.code_ttl_secs),
            delivery_timeout_secs: env_or("OTP_DELIVERY_TIMEOUT_SECS", defaults.delivery_timeout_secs),
            rollback_on_delivery_failure: env_or(
                "OTP_ROLLBACK_ON_DELIVERY_FAILURE",
                defaults.rollback_on_delivery_failure,
            ),
            echo_code: env_or("OTP_ECHO_CODE", defaults.echo_code),
            ticket_ttl_secs: env_or("VERIFICATION_TICKET_TTL_SECS", defaults.ticket_ttl_secs),
        }
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_code_only_in_development() {
        assert!(VerificationConfig::for_environment(Environment::Development).echo_code);
        assert!(!VerificationConfig::for_environment(Environment::Staging).echo_code);
        assert!(!VerificationConfig::for_environment(Environment::Production).echo_code);
    }

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl_secs, 600);
        assert_eq!(config.delivery_timeout_secs, 10);
        assert!(!config.rollback_on_delivery_failure);
        assert_eq!(config.ticket_ttl_secs, 900);
    }
}
