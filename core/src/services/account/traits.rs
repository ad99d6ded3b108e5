//! Traits for password handling

use async_trait::async_trait;

/// One-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password
    async fn hash(&self, password: &str) -> Result<String, String>;

    /// Check a plain-text password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String>;
}
