//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El catálogo es de solo lectura; las únicas
//! piezas mutables son la tabla de sesiones y la lista del newsletter.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::config::environment::{AuthProviderConfig, EnvironmentConfig};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::auth_provider::{AuthError, AuthProvider, LocalAuthProvider, SupabaseAuthProvider};
use crate::services::auth_service::AuthService;
use crate::services::jwt_service::{JwtConfig, JwtService};
use crate::services::newsletter_service::NewsletterService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<VehicleRepository>,
    pub auth: Arc<AuthService>,
    pub newsletter: Arc<NewsletterService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, catalog: VehicleRepository, provider: Arc<dyn AuthProvider>) -> Self {
        let jwt_service = JwtService::new(JwtConfig::new(config.jwt_secret.clone(), config.jwt_expiration));
        let auth = AuthService::new(provider, jwt_service, &config.admin_email);

        Self {
            catalog: Arc::new(catalog),
            auth: Arc::new(auth),
            newsletter: Arc::new(NewsletterService::new()),
            config,
        }
    }
}

/// Construye el proveedor de identidad indicado en la configuración
pub fn build_auth_provider(config: &EnvironmentConfig) -> Result<Arc<dyn AuthProvider>, AuthError> {
    let provider: Arc<dyn AuthProvider> = match &config.auth_provider {
        AuthProviderConfig::Supabase { url, anon_key } => {
            Arc::new(SupabaseAuthProvider::new(Client::new(), url, anon_key))
        }
        AuthProviderConfig::Local { admin_password } => Arc::new(
            LocalAuthProvider::new(bcrypt::DEFAULT_COST).with_account(&config.admin_email, admin_password)?,
        ),
    };
    info!("🔐 Proveedor de identidad: {}", provider.name());
    Ok(provider)
}
