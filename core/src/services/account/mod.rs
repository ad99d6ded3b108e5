//! Account service module
//!
//! Registration gated by a verification ticket, login checks and profile
//! lookup.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::AccountService;
pub use traits::PasswordHasher;
pub use types::LoginOutcome;
