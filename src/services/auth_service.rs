use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::auth::{AdminSession, AuthUser, Credentials};
use crate::services::auth_provider::{AuthError, AuthProvider};
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;

/// Servicio de autenticación del área de administración
///
/// Delega la verificación de credenciales en el proveedor y mantiene la
/// tabla de sesiones activas. `is_admin` es la comparación literal del email
/// con `admin_email`.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    jwt_service: JwtService,
    admin_email: String,
    // Cache de sesiones activas
    active_sessions: RwLock<HashMap<String, AdminSession>>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>, jwt_service: JwtService, admin_email: &str) -> Self {
        Self {
            provider,
            jwt_service,
            admin_email: admin_email.trim().to_lowercase(),
            active_sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.admin_email)
    }

    /// Autentica contra el proveedor y abre una sesión
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(String, AdminSession), AppError> {
        let user = self.provider.sign_in(credentials).await.map_err(|e| match e {
            AuthError::InvalidCredentials => {
                warn!("❌ Login rechazado para {}", credentials.email);
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::Provider(msg) => AppError::ExternalApi(msg),
            AuthError::Hash(e) => AppError::Hash(e.to_string()),
        })?;

        let now = Utc::now();
        let session = AdminSession {
            session_id: Uuid::new_v4().to_string(),
            user_id: user.id,
            is_admin: self.is_admin_email(&user.email),
            email: user.email,
            provider_token: user.provider_token,
            created_at: now,
            expires_at: now + self.jwt_service.session_duration(),
        };

        let token = self.jwt_service.generate_session_token(&session)?;

        let mut sessions = self.active_sessions.write().await;
        sessions.insert(session.session_id.clone(), session.clone());
        info!(
            "✅ Sesión abierta para {} (admin: {}, sesiones activas: {})",
            session.email,
            session.is_admin,
            sessions.len()
        );

        Ok((token, session))
    }

    /// Resuelve un token Bearer a su sesión activa
    pub async fn resolve_session(&self, token: &str) -> Result<AdminSession, AppError> {
        let claims = self.jwt_service.validate_token(token)?;

        let sessions = self.active_sessions.read().await;
        let session = sessions
            .get(&claims.sid)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Session not found or signed out".to_string()))?;

        if session.is_expired() {
            return Err(AppError::Unauthorized("Session expired".to_string()));
        }
        Ok(session)
    }

    /// Cierra la sesión local y avisa al proveedor
    pub async fn sign_out(&self, session_id: &str) -> Result<(), AppError> {
        let removed = self.active_sessions.write().await.remove(session_id);
        let Some(session) = removed else {
            return Err(AppError::Unauthorized("Session not found or signed out".to_string()));
        };

        let user = AuthUser {
            id: session.user_id.clone(),
            email: session.email.clone(),
            provider_token: session.provider_token.clone(),
        };
        if let Err(e) = self.provider.sign_out(&user).await {
            error!("❌ Error cerrando sesión en {}: {}", self.provider.name(), e);
        }

        info!("👋 Sesión cerrada para {}", session.email);
        Ok(())
    }

    pub async fn active_session_count(&self) -> usize {
        self.active_sessions.read().await.len()
    }

    /// Limpiar sesiones expiradas
    pub async fn cleanup_expired_sessions(&self) -> usize {
        let mut sessions = self.active_sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        before - sessions.len()
    }
}
