//! Integration tests for the OTP and signup endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use im_api::create_app;
use im_shared::config::VerificationConfig;

use common::{context, context_with, RecordingMailer, StubAssistant};

const EMAIL: &str = "asha@example.com";

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

fn no_assistant() -> StubAssistant {
    StubAssistant {
        configured: false,
        reply: Ok(String::new()),
    }
}

#[actix_web::test]
async fn test_full_signup_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP sent successfully");
    let code = body["otp"].as_str().unwrap().to_string();
    assert_eq!(Some(code.clone()), ctx.mailer.last_code_for(EMAIL));

    let resp = test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "True");
    let token = body["verification_token"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        post(
            "/signup",
            json!({ "name": "Asha", "email": EMAIL, "pass": "secret", "verification_token": token }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");

    let resp = test::call_service(&app, post("/check-user", json!({ "email": EMAIL })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["exists"], true);

    let resp = test::call_service(&app, post("/login", json!({ "email": EMAIL, "pass": "secret" })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Exist");

    let resp = test::call_service(&app, post("/login", json!({ "email": EMAIL, "pass": "nope" })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No Exist Pass");

    let resp = test::call_service(&app, post("/get-user-info", json!({ "email": EMAIL })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["name"], "Asha");
}

#[actix_web::test]
async fn test_code_is_single_use() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    let code = ctx.mailer.last_code_for(EMAIL).unwrap();

    let first: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;
    let second: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;

    assert_eq!(first["message"], "True");
    assert_eq!(second["message"], "False");
    assert!(second.get("verification_token").is_none());
}

#[actix_web::test]
async fn test_new_request_replaces_old_code() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    let first = ctx.mailer.last_code_for(EMAIL).unwrap();
    let mut second = first.clone();
    while second == first {
        test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
        second = ctx.mailer.last_code_for(EMAIL).unwrap();
    }

    let stale: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": first })).to_request()).await,
    )
    .await;
    let fresh: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": second })).to_request()).await,
    )
    .await;

    assert_eq!(stale["message"], "False");
    assert_eq!(fresh["message"], "True");
}

#[actix_web::test]
async fn test_email_is_normalized() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    test::call_service(&app, post("/otp", json!({ "email": "  Asha@Example.COM " })).to_request()).await;
    let code = ctx.mailer.last_code_for(EMAIL).unwrap();

    let body: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;
    assert_eq!(body["message"], "True");
}

#[actix_web::test]
async fn test_otp_requires_email() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otp", json!({})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email is required in the request body");
    assert_eq!(ctx.mailer.count(), 0);
}

#[actix_web::test]
async fn test_otpcheck_requires_both_fields() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Both email and OTP are required");
}

#[actix_web::test]
async fn test_otp_for_existing_account_is_conflict() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    // Register the account through the normal flow first
    test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    let code = ctx.mailer.last_code_for(EMAIL).unwrap();
    let body: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;
    let token = body["verification_token"].as_str().unwrap().to_string();
    test::call_service(
        &app,
        post("/signup", json!({ "name": "Asha", "email": EMAIL, "pass": "secret", "verification_token": token })).to_request(),
    )
    .await;
    let sent_before = ctx.mailer.count();

    let resp = test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User already exists");
    assert_eq!(ctx.mailer.count(), sent_before);
}

#[actix_web::test]
async fn test_signup_without_token_is_forbidden() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/signup", json!({ "name": "Asha", "email": EMAIL, "pass": "secret" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(&app, post("/check-user", json!({ "email": EMAIL })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["exists"], false);
}

#[actix_web::test]
async fn test_delivery_failure_reports_error() {
    let ctx = context_with(RecordingMailer::failing(), no_assistant(), VerificationConfig::default());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to send OTP email");

    // Without rollback the stored code still verifies
    let code = ctx.mailer.last_code_for(EMAIL).unwrap();
    let body: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;
    assert_eq!(body["message"], "True");
}

#[actix_web::test]
async fn test_code_not_echoed_when_disabled() {
    let verification = VerificationConfig {
        echo_code: false,
        ..VerificationConfig::default()
    };
    let ctx = context_with(RecordingMailer::default(), no_assistant(), verification);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("otp").is_none());
}

#[actix_web::test]
async fn test_padded_candidate_does_not_match() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    test::call_service(&app, post("/otp", json!({ "email": EMAIL })).to_request()).await;
    let code = ctx.mailer.last_code_for(EMAIL).unwrap();

    for padded in [format!(" {}", code), format!("{}\n", code)] {
        let body: Value = test::read_body_json(
            test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": padded })).to_request()).await,
        )
        .await;
        assert_eq!(body["message"], "False");
    }

    // The mismatches left the code in place
    let body: Value = test::read_body_json(
        test::call_service(&app, post("/otpcheck", json!({ "email": EMAIL, "otp": code })).to_request()).await,
    )
    .await;
    assert_eq!(body["message"], "True");
}

#[actix_web::test]
async fn test_otp_refuses_address_signup_would_reject() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, post("/otp", json!({ "email": "asha@localhost" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(ctx.mailer.count(), 0);
}
