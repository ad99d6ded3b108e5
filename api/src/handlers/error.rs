//! Mapping of domain errors and extractor failures to HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use im_core::errors::{AuthError, DomainError};
use im_shared::errors::{error_codes, ErrorResponse};

/// HTTP status for a domain error
///
/// Validation maps to 400, duplicate accounts to 409, missing verification
/// to 403, unknown accounts to 404. Delivery and storage failures are 500.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(auth) => match auth {
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::VerificationRequired => StatusCode::FORBIDDEN,
            AuthError::DeliveryFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        },
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error handler for the JSON extractor
///
/// Malformed or oversized bodies get the shared error body instead of
/// actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);

    let (status, code) = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, error_codes::VALIDATION_ERROR)
        }
        _ => (StatusCode::BAD_REQUEST, error_codes::INVALID_JSON),
    };

    let body = ErrorResponse::new(code, err.to_string());
    InternalError::from_response(err, HttpResponse::build(status).json(body)).into()
}

/// Default 404 handler
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
            .add_detail("path", req.path()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use im_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ValidationError::InvalidEmail.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&AuthError::UserAlreadyExists.into()), StatusCode::CONFLICT);
        assert_eq!(status_for(&AuthError::VerificationRequired.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_for(&AuthError::UserNotFound.into()), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&AuthError::DeliveryFailed { reason: "smtp".into() }.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_for(&DomainError::internal("db")), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
