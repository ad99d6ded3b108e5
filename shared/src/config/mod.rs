//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `assistant` - Hosted completion API used by the Q&A page
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - SMTP transport used to deliver one-time codes
//! - `server` - HTTP server and CORS configuration
//! - `verification` - One-time code and verification ticket lifetimes

pub mod assistant;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use assistant::AssistantConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration (absent means in-memory stores)
    pub database: Option<DatabaseConfig>,

    /// Mail transport configuration (absent means log-only delivery)
    pub mail: Option<MailConfig>,

    /// Assistant configuration
    pub assistant: AssistantConfig,

    /// Verification configuration
    pub verification: VerificationConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            mail: None,
            assistant: AssistantConfig::default(),
            verification: VerificationConfig::for_environment(env),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Callers are expected to have loaded any `.env` file beforehand.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            assistant: AssistantConfig::from_env(),
            verification: VerificationConfig::from_env(environment),
            cors: CorsConfig::from_env(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is absent or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a non-empty environment variable.
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_in_memory_backends() {
        let config = AppConfig::default();
        assert!(config.database.is_none());
        assert!(config.mail.is_none());
        assert!(config.verification.echo_code);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("IM_SHARED_TEST_NUMBER", "not-a-number");
        assert_eq!(env_or("IM_SHARED_TEST_NUMBER", 42u64), 42);
        std::env::set_var("IM_SHARED_TEST_NUMBER", " 7 ");
        assert_eq!(env_or("IM_SHARED_TEST_NUMBER", 42u64), 7);
        std::env::remove_var("IM_SHARED_TEST_NUMBER");
    }
}
