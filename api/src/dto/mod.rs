//! Request and response bodies
//!
//! Request fields default to empty so that missing fields reach validation
//! and produce the endpoint's own error body.

pub mod content;
pub mod otp;
pub mod user;

use im_shared::utils::normalize_email;
use validator::ValidationErrors;

/// First validation message, falling back to the error code
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| field.clone());
    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .next()
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .unwrap_or_else(|| "Invalid request".to_string())
}

pub(crate) fn normalize(email: &mut String) {
    *email = normalize_email(email);
}

