use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::dto::content::AskRequest;
use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for POST /ai
///
/// Upstream failures still answer 200 with a fallback message so the chat
/// widget always has something to show.
pub async fn ask(state: web::Data<AppState>, body: web::Json<AskRequest>) -> HttpResponse {
    match state.assistant.ask(&body.question).await {
        Ok(answer) => HttpResponse::Ok().json(answer),
        Err(error) => HttpResponse::build(status_for(&error)).json(json!({
            "answer": "",
            "error": error.to_string(),
        })),
    }
}
