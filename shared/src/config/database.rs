//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_non_empty, env_or};

/// MySQL pool settings
///
/// Timeouts are in seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// How long to wait for a free connection
    pub connect_timeout: u64,

    /// Idle connections are closed after this long
    pub idle_timeout: u64,

    /// Connections are recycled after this long
    pub max_lifetime: u64,
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// Returns `None` when `DATABASE_URL` is not set, in which case the
    /// server falls back to in-memory stores.
    pub fn from_env() -> Option<Self> {
        let url = env_non_empty("DATABASE_URL")?;
        Some(Self {
            url,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", 30),
            idle_timeout: env_or("DATABASE_IDLE_TIMEOUT", 600),
            max_lifetime: env_or("DATABASE_MAX_LIFETIME", 1800),
        })
    }

    /// Pool settings for `url` with the default sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
        }
    }
}
