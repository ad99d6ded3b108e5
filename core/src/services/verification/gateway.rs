//! Verification gateway: issues, delivers and checks one-time codes

use std::sync::Arc;

use im_shared::utils::{is_valid_email, mask_email};

use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::account::AccountRepository;

use super::config::VerificationServiceConfig;
use super::generator::generate_code;
use super::ledger::OtpLedger;
use super::template::CodeEmail;
use super::ticket::TicketLedger;
use super::traits::Mailer;
use super::types::{CodeIssued, VerifyOutcome};

/// Gateway in front of account creation
///
/// Owns the OTP ledger and the ticket ledger. A successful [`verify`] hands
/// out a ticket that the account service redeems at signup.
///
/// [`verify`]: VerificationGateway::verify
pub struct VerificationGateway<A, M>
where
    A: AccountRepository + ?Sized,
    M: Mailer + ?Sized,
{
    account_repository: Arc<A>,
    mailer: Arc<M>,
    ledger: OtpLedger,
    tickets: Arc<TicketLedger>,
    config: VerificationServiceConfig,
}

impl<A, M> VerificationGateway<A, M>
where
    A: AccountRepository + ?Sized,
    M: Mailer + ?Sized,
{
    /// Create a gateway with empty ledgers
    pub fn new(account_repository: Arc<A>, mailer: Arc<M>, config: VerificationServiceConfig) -> Self {
        Self {
            account_repository,
            mailer,
            ledger: OtpLedger::new(config.code_ttl),
            tickets: Arc::new(TicketLedger::new(config.ticket_ttl)),
            config,
        }
    }

    /// Ticket ledger shared with the account service
    pub fn tickets(&self) -> Arc<TicketLedger> {
        Arc::clone(&self.tickets)
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Number of codes currently held by the ledger
    pub fn outstanding_codes(&self) -> usize {
        self.ledger.len()
    }

    /// Issue a code for `identity` and deliver it by email
    ///
    /// `identity` must already be normalized. Any earlier outstanding code for
    /// the same identity stops matching as soon as the new one is stored.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidEmail` - `identity` would be refused at
    ///   signup; nothing is stored or sent
    /// * `AuthError::UserAlreadyExists` - an account is registered for
    ///   `identity`; nothing is stored or sent
    /// * `AuthError::DeliveryFailed` - the mailer failed or timed out; the
    ///   code stays in the ledger unless rollback is enabled
    /// * `DomainError::Internal` - the account lookup failed
    pub async fn request_code(&self, identity: &str) -> DomainResult<CodeIssued> {
        if !is_valid_email(identity) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if self.account_repository.exists_by_email(identity).await? {
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_request_for_existing_account",
                "Code requested for an already registered email"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let code = generate_code();
        let record = self.ledger.put(identity, &code);
        let expires_at = record.expires_at(self.ledger.ttl());

        tracing::info!(
            email = %mask_email(identity),
            expires_at = %expires_at,
            event = "otp_issued",
            "Verification code issued"
        );

        let email = CodeEmail::render(&code, self.ledger.ttl().num_minutes());
        let delivery = tokio::time::timeout(
            self.config.delivery_timeout,
            self.mailer.send(identity, &email.subject, &email.text, &email.html),
        )
        .await;

        let failure = match delivery {
            Ok(Ok(())) => None,
            Ok(Err(reason)) => Some(reason),
            Err(_) => Some(format!(
                "delivery timed out after {}s",
                self.config.delivery_timeout.as_secs()
            )),
        };

        if let Some(reason) = failure {
            let rolled_back = self.config.rollback_on_delivery_failure
                && self.ledger.discard_if_matches(identity, &code);
            tracing::error!(
                email = %mask_email(identity),
                error = %reason,
                rolled_back,
                event = "otp_delivery_failed",
                "Failed to deliver verification code"
            );
            return Err(AuthError::DeliveryFailed { reason }.into());
        }

        tracing::info!(
            email = %mask_email(identity),
            event = "otp_delivered",
            "Verification code delivered"
        );

        Ok(CodeIssued {
            identity: identity.to_string(),
            code,
            expires_at,
        })
    }

    /// Check `candidate` against the outstanding code for `identity`
    ///
    /// A match consumes the code and yields a fresh ticket. Anything else,
    /// including an expired code or a malformed candidate, is `Rejected`.
    pub fn verify(&self, identity: &str, candidate: &str) -> VerifyOutcome {
        if self.ledger.try_consume(identity, candidate) {
            let ticket = self.tickets.issue(identity);
            tracing::info!(
                email = %mask_email(identity),
                event = "otp_verified",
                "Verification code accepted"
            );
            VerifyOutcome::Verified(ticket)
        } else {
            tracing::info!(
                email = %mask_email(identity),
                event = "otp_rejected",
                "Verification code rejected"
            );
            VerifyOutcome::Rejected
        }
    }

    /// Consume a ticket issued by [`verify`](Self::verify) for `identity`
    pub fn redeem_ticket(&self, token: &str, identity: &str) -> bool {
        self.tickets.redeem(token, identity)
    }
}
