//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) | AppError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        let error_response = match self {
            AppError::Validation(e) => ErrorResponse {
                error: "Validation Error".to_string(),
                message: "The provided data is invalid".to_string(),
                details: Some(json!(e)),
                code: "VALIDATION_ERROR".to_string(),
            },
            AppError::BadRequest(msg) => ErrorResponse {
                error: "Bad Request".to_string(),
                message: msg,
                details: None,
                code: "BAD_REQUEST".to_string(),
            },
            AppError::Unauthorized(msg) => ErrorResponse {
                error: "Unauthorized".to_string(),
                message: msg,
                details: None,
                code: "UNAUTHORIZED".to_string(),
            },
            AppError::Forbidden(msg) => ErrorResponse {
                error: "Forbidden".to_string(),
                message: msg,
                details: None,
                code: "FORBIDDEN".to_string(),
            },
            AppError::NotFound(msg) => ErrorResponse {
                error: "Not Found".to_string(),
                message: msg,
                details: None,
                code: "NOT_FOUND".to_string(),
            },
            AppError::Conflict(msg) => ErrorResponse {
                error: "Conflict".to_string(),
                message: msg,
                details: None,
                code: "CONFLICT".to_string(),
            },
            AppError::Internal(msg) => ErrorResponse {
                error: "Internal Server Error".to_string(),
                message: "An unexpected error occurred".to_string(),
                details: Some(json!({ "internal_error": msg })),
                code: "INTERNAL_ERROR".to_string(),
            },
            AppError::RateLimitExceeded => ErrorResponse {
                error: "Rate Limit Exceeded".to_string(),
                message: "Too many requests. Please try again later".to_string(),
                details: None,
                code: "RATE_LIMIT_EXCEEDED".to_string(),
            },
            AppError::Jwt(msg) => ErrorResponse {
                error: "JWT Error".to_string(),
                message: msg,
                details: None,
                code: "JWT_ERROR".to_string(),
            },
            AppError::Hash(msg) => ErrorResponse {
                error: "Hash Error".to_string(),
                message: "An error occurred while processing credentials".to_string(),
                details: Some(json!({ "hash_error": msg })),
                code: "HASH_ERROR".to_string(),
            },
            AppError::ExternalApi(msg) => ErrorResponse {
                error: "External API Error".to_string(),
                message: "An error occurred while communicating with external service".to_string(),
                details: Some(json!({ "external_api_error": msg })),
                code: "EXTERNAL_API_ERROR".to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

// Rechazos de los extractores de axum con el mismo cuerpo JSON que el resto
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}
