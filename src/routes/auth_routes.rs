use axum::{
    extract::{rejection::JsonRejection, State},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, SessionResponse};
use crate::dto::dashboard_dto::DashboardResponse;
use crate::middleware::{
    admin_only_middleware, auth_middleware, rate_limit_middleware, AuthenticatedSession, RateLimitState,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de `/api/admin`: login público y el resto detrás de sesión
pub fn create_admin_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/login", post(login))
        .route_layer(from_fn_with_state(
            RateLimitState::from_config(&state.config),
            rate_limit_middleware,
        ));

    let session = Router::new()
        .route("/logout", post(logout))
        .route("/session", get(current_session))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    // el orden importa: auth_middleware corre primero y deja la sesión
    let dashboard = Router::new()
        .route("/dashboard", get(dashboard))
        .route_layer(from_fn(admin_only_middleware))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    public.merge(session).merge(dashboard)
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let Json(request) = payload?;
    let controller = AuthController::new(state.auth.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn logout(
    State(state): State<AppState>,
    Extension(AuthenticatedSession(session)): Extension<AuthenticatedSession>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state.auth.clone());
    let response = controller.logout(&session).await?;
    Ok(Json(response))
}

async fn current_session(
    State(state): State<AppState>,
    Extension(AuthenticatedSession(session)): Extension<AuthenticatedSession>,
) -> Json<ApiResponse<SessionResponse>> {
    let controller = AuthController::new(state.auth.clone());
    Json(controller.session(&session))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(AuthenticatedSession(session)): Extension<AuthenticatedSession>,
) -> Json<ApiResponse<DashboardResponse>> {
    let controller = AdminController::new(state.catalog.clone(), state.newsletter.clone());
    Json(controller.dashboard(&session).await)
}
