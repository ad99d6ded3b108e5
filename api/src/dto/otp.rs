use serde::{Deserialize, Serialize};
use validator::Validate;

use super::normalize;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OtpRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required in the request body"),
        email(message = "Invalid email format")
    )]
    pub email: String,
}

impl OtpRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OtpResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OtpCheckRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Both email and OTP are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Both email and OTP are required"))]
    pub otp: String,
}

impl OtpCheckRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OtpCheckResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
}
