use serde::{Deserialize, Serialize};
use validator::Validate;

use super::normalize;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EmailRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

impl EmailRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub pass: String,

    /// Token returned by `/otpcheck`
    #[serde(default)]
    pub verification_token: Option<String>,
}

impl SignupRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self.name = self.name.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub pass: String,
}

impl LoginRequest {
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.email);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub success: bool,
    pub name: String,
    pub email: String,
}
