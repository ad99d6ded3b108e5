//! Route handlers
//!
//! Paths and response bodies match the existing web client:
//! - `otp`: code request and verification
//! - `user`: check-user, signup, login, user info
//! - `idea`: idea submission and listing
//! - `feedback`: feedback form
//! - `ai`: design assistant
//! - `health`: liveness endpoints

pub mod ai;
pub mod feedback;
pub mod health;
pub mod idea;
pub mod otp;
pub mod user;

use actix_web::web;

/// Register every route on the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .route("/otp", web::post().to(otp::request_otp))
        .route("/otpcheck", web::post().to(otp::check_otp))
        .route("/check-user", web::post().to(user::check_user))
        .route("/signup", web::post().to(user::signup))
        .route("/login", web::post().to(user::login))
        .route("/get-user-info", web::post().to(user::get_user_info))
        .route("/feedback", web::post().to(feedback::submit_feedback))
        .route("/ai", web::post().to(ai::ask))
        .route("/create-idea", web::post().to(idea::create_idea))
        .route("/get-ideas", web::get().to(idea::get_ideas))
        .route("/get-ideas/{category}", web::get().to(idea::get_ideas_by_category));
}
