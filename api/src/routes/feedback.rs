use actix_web::{web, HttpResponse};
use serde_json::json;

use im_shared::utils::normalize_email;

use crate::dto::content::FeedbackRequest;
use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for POST /feedback
pub async fn submit_feedback(state: web::Data<AppState>, body: web::Json<FeedbackRequest>) -> HttpResponse {
    let data = body.into_inner().data;
    let email = normalize_email(&data.email);

    match state.feedback.submit(&data.first_name, &email, &data.feedback).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "True" })),
        Err(error) => {
            log::error!("Error saving feedback: {}", error);
            HttpResponse::build(status_for(&error)).json(json!({
                "message": "False",
                "error": error.to_string(),
            }))
        }
    }
}
