use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::services::account::{AccountService, LoginOutcome, PasswordHasher};
use crate::services::verification::tests::mocks::MockAccountRepository;
use crate::services::verification::TicketLedger;

const EMAIL: &str = "asha@example.com";

// Reversible stand-in for bcrypt
struct MockHasher;

#[async_trait]
impl PasswordHasher for MockHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        Ok(hash == format!("hashed:{}", password))
    }
}

struct Fixture {
    service: AccountService<MockAccountRepository, MockHasher>,
    repo: Arc<MockAccountRepository>,
    tickets: Arc<TicketLedger>,
}

fn fixture_with(repo: MockAccountRepository) -> Fixture {
    let repo = Arc::new(repo);
    let tickets = Arc::new(TicketLedger::new(Duration::minutes(15)));
    let service = AccountService::new(Arc::clone(&repo), Arc::new(MockHasher), Arc::clone(&tickets));
    Fixture { service, repo, tickets }
}

fn fixture() -> Fixture {
    fixture_with(MockAccountRepository::new())
}

#[tokio::test]
async fn test_signup_with_ticket_creates_account() {
    let f = fixture();
    let ticket = f.tickets.issue(EMAIL);

    let account = f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await.unwrap();

    assert_eq!(account.name, "Asha");
    assert_eq!(account.email, EMAIL);
    assert_eq!(account.password_hash, "hashed:secret");
    assert_eq!(f.repo.count(), 1);
    assert!(f.service.check_user(EMAIL).await.unwrap());
}

#[tokio::test]
async fn test_signup_without_ticket_is_rejected() {
    let f = fixture();

    let result = f.service.signup("Asha", EMAIL, "secret", None).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::VerificationRequired))));
    assert_eq!(f.repo.count(), 0);
}

#[tokio::test]
async fn test_signup_with_unknown_ticket_is_rejected() {
    let f = fixture();

    let result = f.service.signup("Asha", EMAIL, "secret", Some("forged")).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::VerificationRequired))));
}

#[tokio::test]
async fn test_ticket_for_other_email_is_rejected() {
    let f = fixture();
    let ticket = f.tickets.issue("other@example.com");

    let result = f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::VerificationRequired))));
    // Still valid for the email it was issued for
    assert!(f.tickets.redeem(&ticket.token, "other@example.com"));
}

#[tokio::test]
async fn test_ticket_is_single_use() {
    let f = fixture();
    let ticket = f.tickets.issue(EMAIL);
    f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await.unwrap();

    let result = f.service.signup("Asha", "second@example.com", "secret", Some(&ticket.token)).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::VerificationRequired))));
}

#[tokio::test]
async fn test_expired_ticket_is_rejected() {
    let f = fixture();
    let ticket = f.tickets.issue_at(EMAIL, Utc::now() - Duration::minutes(16));

    let result = f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::VerificationRequired))));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let f = fixture_with(MockAccountRepository::with_account(EMAIL));
    let ticket = f.tickets.issue(EMAIL);

    let result = f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserAlreadyExists))));
    // Duplicate check runs before redemption
    assert_eq!(f.tickets.len(), 1);
}

#[tokio::test]
async fn test_signup_validates_input() {
    let f = fixture();
    let ticket = f.tickets.issue(EMAIL);

    let result = f.service.signup("  ", EMAIL, "secret", Some(&ticket.token)).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { ref field })) if field == "name"
    ));

    let result = f.service.signup("Asha", "not-an-email", "secret", Some(&ticket.token)).await;
    assert!(matches!(result, Err(DomainError::ValidationErr(ValidationError::InvalidEmail))));

    let result = f.service.signup("Asha", EMAIL, "", Some(&ticket.token)).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { ref field })) if field == "pass"
    ));

    // Nothing was redeemed by the rejected attempts
    assert!(f.tickets.redeem(&ticket.token, EMAIL));
}

#[tokio::test]
async fn test_login_outcomes() {
    let f = fixture();
    let ticket = f.tickets.issue(EMAIL);
    f.service.signup("Asha", EMAIL, "secret", Some(&ticket.token)).await.unwrap();

    assert!(matches!(
        f.service.login("nobody@example.com", "secret").await.unwrap(),
        LoginOutcome::UnknownEmail
    ));
    assert!(matches!(
        f.service.login(EMAIL, "wrong").await.unwrap(),
        LoginOutcome::WrongPassword
    ));
    match f.service.login(EMAIL, "secret").await.unwrap() {
        LoginOutcome::Authenticated(account) => assert_eq!(account.email, EMAIL),
        other => panic!("expected authenticated, got {other:?}"),
    }
}

#[tokio::test]
async fn test_user_info() {
    let f = fixture_with(MockAccountRepository::with_account(EMAIL));

    let account = f.service.user_info(EMAIL).await.unwrap();
    assert_eq!(account.name, "Existing");

    let missing = f.service.user_info("nobody@example.com").await;
    assert!(matches!(missing, Err(DomainError::Auth(AuthError::UserNotFound))));
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let f = fixture_with(MockAccountRepository::failing());

    assert!(matches!(f.service.check_user(EMAIL).await, Err(DomainError::Internal { .. })));
    assert!(matches!(f.service.login(EMAIL, "x").await, Err(DomainError::Internal { .. })));
}
