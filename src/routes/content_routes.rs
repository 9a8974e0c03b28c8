use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::newsletter_dto::{NewsletterRequest, NewsletterResponse};
use crate::models::content::{FeaturedCar, Highlight, LandingContent, Testimonial};
use crate::services::content_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub q: String,
}

/// Contenido estático de la landing
pub fn create_content_router() -> Router<AppState> {
    Router::new()
        .route("/featured", get(featured))
        .route("/testimonials", get(testimonials))
        .route("/highlights", get(highlights))
        .route("/landing", get(landing))
}

pub fn create_locations_router() -> Router<AppState> {
    Router::new().route("/", get(locations))
}

pub fn create_newsletter_router() -> Router<AppState> {
    Router::new().route("/", post(subscribe))
}

async fn featured(State(state): State<AppState>) -> Json<ApiResponse<Vec<FeaturedCar>>> {
    Json(ApiResponse::success(content_service::featured_cars(&state.catalog)))
}

async fn testimonials() -> Json<ApiResponse<Vec<Testimonial>>> {
    Json(ApiResponse::success(content_service::testimonials()))
}

async fn highlights() -> Json<ApiResponse<Vec<Highlight>>> {
    Json(ApiResponse::success(content_service::highlights()))
}

async fn landing(State(state): State<AppState>) -> Json<ApiResponse<LandingContent>> {
    Json(ApiResponse::success(content_service::landing_content(&state.catalog)))
}

async fn locations(
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let Query(query) = query?;
    Ok(Json(ApiResponse::success(content_service::suggest_locations(&query.q))))
}

async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<NewsletterResponse>>), AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let email = request.email.trim().to_lowercase();
    let subscribers = state.newsletter.subscribe(&email).await?;
    info!("📬 Nueva suscripción al newsletter ({} en total)", subscribers);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            NewsletterResponse { email, subscribers },
            "Subscribed".to_string(),
        )),
    ))
}
