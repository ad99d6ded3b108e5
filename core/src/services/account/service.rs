//! Account service implementation

use std::sync::Arc;

use im_shared::utils::{is_valid_email, mask_email};

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::account::AccountRepository;
use crate::services::verification::TicketLedger;

use super::traits::PasswordHasher;
use super::types::LoginOutcome;

/// Account registration, login and lookup
///
/// Emails are expected in normalized form.
pub struct AccountService<A, H>
where
    A: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    /// Account persistence
    account_repository: Arc<A>,
    /// Password hashing
    hasher: Arc<H>,
    /// Tickets issued by the verification gateway
    tickets: Arc<TicketLedger>,
}

impl<A, H> AccountService<A, H>
where
    A: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub fn new(account_repository: Arc<A>, hasher: Arc<H>, tickets: Arc<TicketLedger>) -> Self {
        Self {
            account_repository,
            hasher,
            tickets,
        }
    }

    /// Whether an account is registered for `email`
    pub async fn check_user(&self, email: &str) -> DomainResult<bool> {
        self.account_repository.exists_by_email(email).await
    }

    /// Register a new account
    ///
    /// The ticket handed out by a successful verification of `email` is
    /// redeemed here; without it no account is created.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - empty name or password, malformed email
    /// * `AuthError::UserAlreadyExists` - the email is already registered
    /// * `AuthError::VerificationRequired` - ticket missing, unknown, expired,
    ///   already used or issued for another email
    /// * `DomainError::Internal` - hashing or storage failed
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        ticket: Option<&str>,
    ) -> DomainResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::RequiredField { field: "name".to_string() }.into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField { field: "pass".to_string() }.into());
        }

        if self.account_repository.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let redeemed = ticket.is_some_and(|token| self.tickets.redeem(token, email));
        if !redeemed {
            tracing::warn!(
                email = %mask_email(email),
                event = "signup_without_verification",
                "Signup rejected: no valid verification ticket"
            );
            return Err(AuthError::VerificationRequired.into());
        }

        let password_hash = self
            .hasher
            .hash(password)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;

        let account = self
            .account_repository
            .create(Account::new(name.to_string(), email.to_string(), password_hash))
            .await?;

        tracing::info!(
            email = %mask_email(email),
            account_id = %account.id,
            event = "account_created",
            "Account created"
        );

        Ok(account)
    }

    /// Check credentials for `email`
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let Some(account) = self.account_repository.find_by_email(email).await? else {
            return Ok(LoginOutcome::UnknownEmail);
        };

        let matches = self
            .hasher
            .verify(password, &account.password_hash)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))?;

        if matches {
            Ok(LoginOutcome::Authenticated(account))
        } else {
            tracing::info!(
                email = %mask_email(email),
                event = "login_wrong_password",
                "Login attempt with wrong password"
            );
            Ok(LoginOutcome::WrongPassword)
        }
    }

    /// Load the account registered for `email`
    pub async fn user_info(&self, email: &str) -> DomainResult<Account> {
        self.account_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }
}
