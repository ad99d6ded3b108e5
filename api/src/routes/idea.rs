//! Idea endpoints

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use im_core::errors::DomainResult;
use im_core::domain::entities::Idea;
use im_core::services::idea::IdeaFilter;

use crate::dto::content::{CreateIdeaRequest, CreateIdeaResponse, IdeaDto, IdeaListResponse};
use crate::dto::first_validation_message;
use crate::handlers::status_for;
use crate::state::AppState;

/// Handler for POST /create-idea
pub async fn create_idea(state: web::Data<AppState>, body: web::Json<CreateIdeaRequest>) -> HttpResponse {
    let request = body.into_inner().normalized();
    if let Err(errors) = request.validate() {
        let message = first_validation_message(&errors);
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Error creating idea",
            "error": message,
        }));
    }

    let result = state
        .ideas
        .create(&request.title, &request.description, &request.category, &request.email)
        .await;

    match result {
        Ok(idea) => HttpResponse::Created().json(CreateIdeaResponse {
            success: true,
            message: "Idea created successfully".to_string(),
            idea: IdeaDto::from(idea),
        }),
        Err(error) => {
            log::error!("Error creating idea: {}", error);
            HttpResponse::build(status_for(&error)).json(json!({
                "success": false,
                "message": "Error creating idea",
                "error": error.to_string(),
            }))
        }
    }
}

/// Handler for GET /get-ideas
pub async fn get_ideas(state: web::Data<AppState>) -> HttpResponse {
    list_response(state.ideas.list(IdeaFilter::All).await, "Error fetching ideas")
}

/// Handler for GET /get-ideas/{category}
///
/// `all` (any case) lists every idea.
pub async fn get_ideas_by_category(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let filter = match path.parse::<IdeaFilter>() {
        Ok(filter) => filter,
        Err(error) => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Error fetching ideas by category",
                "error": error.to_string(),
            }));
        }
    };

    list_response(state.ideas.list(filter).await, "Error fetching ideas by category")
}

fn list_response(result: DomainResult<Vec<Idea>>, failure: &str) -> HttpResponse {
    match result {
        Ok(ideas) => HttpResponse::Ok().json(IdeaListResponse {
            success: true,
            ideas: ideas.into_iter().map(IdeaDto::from).collect(),
        }),
        Err(error) => {
            log::error!("{}: {}", failure, error);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": failure,
                "error": error.to_string(),
            }))
        }
    }
}
