pub mod auth_routes;
pub mod content_routes;
pub mod vehicle_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Router completo de la API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/content", content_routes::create_content_router())
        .nest("/api/locations", content_routes::create_locations_router())
        .nest("/api/newsletter", content_routes::create_newsletter_router())
        .nest("/api/admin", auth_routes::create_admin_router(&state))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog_size": state.catalog.len(),
        "auth_provider": state.auth.provider_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
