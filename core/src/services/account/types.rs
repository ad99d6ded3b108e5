use crate::domain::entities::account::Account;

/// Result of a login attempt
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// No account is registered for the email
    UnknownEmail,
    /// The account exists but the password does not match
    WrongPassword,
    /// Email and password match
    Authenticated(Account),
}
