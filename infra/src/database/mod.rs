//! Database module
//!
//! This module provides the account, idea and feedback stores:
//! - MySQL connection pool management and migrations
//! - MySQL repository implementations
//! - In-memory repository implementations used when no database is configured

#[cfg(feature = "mysql")]
pub mod connection;
pub mod memory;
#[cfg(feature = "mysql")]
pub mod mysql;

// Re-export commonly used types
#[cfg(feature = "mysql")]
pub use connection::{DatabasePool, PoolStatistics};
pub use memory::{InMemoryAccountRepository, InMemoryFeedbackRepository, InMemoryIdeaRepository};
#[cfg(feature = "mysql")]
pub use mysql::{MySqlAccountRepository, MySqlFeedbackRepository, MySqlIdeaRepository};
