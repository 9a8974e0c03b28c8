use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credenciales enviadas por el formulario de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Usuario devuelto por el proveedor de identidad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    /// Token del proveedor, necesario para el sign-out remoto
    #[serde(skip_serializing)]
    pub provider_token: Option<String>,
}

/// Sesión activa del área de administración
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub session_id: String,
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(skip_serializing)]
    pub provider_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Claims del JWT de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub sid: String, // session_id
    pub email: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}
