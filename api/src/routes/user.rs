//! Account endpoints

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use im_core::errors::{AuthError, DomainError};
use im_core::services::account::LoginOutcome;
use im_shared::utils::mask_email;

use crate::dto::first_validation_message;
use crate::dto::user::{EmailRequest, LoginRequest, MessageResponse, SignupRequest, UserInfoResponse};
use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for POST /check-user
pub async fn check_user(state: web::Data<AppState>, body: web::Json<EmailRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::new(first_validation_message(&errors)));
    }

    match state.accounts.check_user(&request.email).await {
        Ok(exists) => HttpResponse::Ok().json(json!({ "exists": exists })),
        Err(error) => {
            log::error!("Error checking user {}: {}", mask_email(&request.email), error);
            HttpResponse::InternalServerError().json(json!({
                "message": "Error checking user",
                "error": error.to_string(),
            }))
        }
    }
}

/// Handler for POST /signup
///
/// Requires the `verification_token` returned by `/otpcheck` for the same
/// email.
pub async fn signup(state: web::Data<AppState>, body: web::Json<SignupRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::new(first_validation_message(&errors)));
    }

    let result = state
        .accounts
        .signup(
            &request.name,
            &request.email,
            &request.pass,
            request.verification_token.as_deref(),
        )
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("User created successfully")),
        Err(error) if error.is_client_error() => {
            log::warn!("Signup rejected for {}: {}", mask_email(&request.email), error);
            HttpResponse::build(status_for(&error)).json(MessageResponse::new(error.to_string()))
        }
        Err(error) => {
            log::error!("Error creating user {}: {}", mask_email(&request.email), error);
            HttpResponse::InternalServerError().json(json!({
                "message": "Error creating user",
                "error": error.to_string(),
            }))
        }
    }
}

/// Handler for POST /login
///
/// Answers `"Exist"`, `"No Exist"` (unknown email) or `"No Exist Pass"`
/// (wrong password).
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::new(first_validation_message(&errors)));
    }

    match state.accounts.login(&request.email, &request.pass).await {
        Ok(outcome) => {
            let message = match outcome {
                LoginOutcome::Authenticated(_) => "Exist",
                LoginOutcome::UnknownEmail => "No Exist",
                LoginOutcome::WrongPassword => "No Exist Pass",
            };
            HttpResponse::Ok().json(MessageResponse::new(message))
        }
        Err(error) => {
            log::error!("Error logging in {}: {}", mask_email(&request.email), error);
            HttpResponse::InternalServerError().json(json!({
                "message": "Error logging in",
                "error": error.to_string(),
            }))
        }
    }
}

/// Handler for POST /get-user-info
pub async fn get_user_info(state: web::Data<AppState>, body: web::Json<EmailRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({ "success": false, "message": "Email is required" }));
    }

    match state.accounts.user_info(&request.email).await {
        Ok(account) => HttpResponse::Ok().json(UserInfoResponse {
            success: true,
            name: account.name,
            email: account.email,
        }),
        Err(DomainError::Auth(AuthError::UserNotFound)) => {
            HttpResponse::NotFound().json(json!({ "success": false, "message": "User not found" }))
        }
        Err(error) => {
            log::error!("Error fetching user info for {}: {}", mask_email(&request.email), error);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Error fetching user info",
                "error": error.to_string(),
            }))
        }
    }
}
