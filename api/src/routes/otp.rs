//! Email verification endpoints

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use im_core::errors::{AuthError, DomainError};
use im_core::services::verification::VerifyOutcome;
use im_shared::utils::mask_email;

use crate::dto::first_validation_message;
use crate::dto::otp::{OtpCheckRequest, OtpCheckResponse, OtpRequest, OtpResponse};
use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for POST /otp
///
/// Issues a code for the email and sends it. Fails with 409 when the email
/// already has an account.
///
/// # Request Body
///
/// ```json
/// { "email": "asha@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "OTP sent successfully" }
/// ```
pub async fn request_otp(state: web::Data<AppState>, body: web::Json<OtpRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();

    if let Err(errors) = request.validate() {
        let message = first_validation_message(&errors);
        log::warn!("Rejected OTP request: {}", message);
        return HttpResponse::BadRequest().json(json!({ "success": false, "error": message }));
    }

    log::info!("Processing OTP request for {}", mask_email(&request.email));

    match state.gateway.request_code(&request.email).await {
        Ok(issued) => HttpResponse::Ok().json(OtpResponse {
            success: true,
            message: "OTP sent successfully".to_string(),
            otp: state.echo_code.then_some(issued.code),
        }),
        Err(error) => {
            let summary = match &error {
                DomainError::ValidationErr(_) => "Invalid email format",
                DomainError::Auth(AuthError::UserAlreadyExists) => "User already exists",
                DomainError::Auth(AuthError::DeliveryFailed { .. }) => "Failed to send OTP email",
                _ => "Server error when generating OTP",
            };
            log::error!("OTP request for {} failed: {}", mask_email(&request.email), error);
            HttpResponse::build(status_for(&error)).json(json!({
                "success": false,
                "error": summary,
                "details": error.to_string(),
            }))
        }
    }
}

/// Handler for POST /otpcheck
///
/// A match answers `"True"` together with the token `/signup` requires; any
/// mismatch answers `"False"`.
pub async fn check_otp(state: web::Data<AppState>, body: web::Json<OtpCheckRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();

    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Both email and OTP are required",
        }));
    }

    let response = match state.gateway.verify(&request.email, &request.otp) {
        VerifyOutcome::Verified(ticket) => OtpCheckResponse {
            message: "True",
            verification_token: Some(ticket.token),
        },
        VerifyOutcome::Rejected => OtpCheckResponse {
            message: "False",
            verification_token: None,
        },
    };

    HttpResponse::Ok().json(response)
}
