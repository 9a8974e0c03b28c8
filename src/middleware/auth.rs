//! Middleware de autenticación JWT
//!
//! Este módulo extrae el token Bearer, lo resuelve contra la tabla de
//! sesiones y deja la sesión en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::{models::auth::AdminSession, state::AppState, utils::errors::AppError};

/// Sesión autenticada que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub AdminSession);

pub fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let session = state.auth.resolve_session(token).await?;

    request.extensions_mut().insert(AuthenticatedSession(session));
    Ok(next.run(request).await)
}

/// Middleware para verificar permisos de admin
pub async fn admin_only_middleware(
    Extension(AuthenticatedSession(session)): Extension<AuthenticatedSession>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !session.is_admin {
        return Err(AppError::Forbidden(
            "Se requieren permisos de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
