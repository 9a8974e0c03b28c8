use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::auth::{AdminSession, Credentials};
use crate::utils::validation::validate_not_blank;

// Request de login del área de administración
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email is required"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email.trim().to_string(),
            password: request.password,
        }
    }
}

// Sesión visible para el cliente (sin tokens del proveedor)
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&AdminSession> for SessionResponse {
    fn from(session: &AdminSession) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            is_admin: session.is_admin,
            created_at: session.created_at,
            expires_at: session.expires_at,
        }
    }
}

// Response de login exitoso
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub session: SessionResponse,
}
