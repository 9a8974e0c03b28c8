//! Proveedores de identidad
//!
//! El login del área de administración delega en un proveedor externo opaco
//! con dos capacidades: `sign_in` y `sign_out`. `SupabaseAuthProvider` habla
//! con la API de Supabase Auth; `LocalAuthProvider` guarda cuentas con hash
//! bcrypt en memoria y se usa en desarrollo y en tests.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::auth::{AuthUser, Credentials};

/// Errores del proveedor de identidad
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Nombre corto del proveedor para logs
    fn name(&self) -> &'static str;

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self, user: &AuthUser) -> Result<(), AuthError>;
}

/// Proveedor Supabase Auth (grant `password`)
pub struct SupabaseAuthProvider {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct SupabaseTokenResponse {
    access_token: String,
    user: SupabaseUser,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl SupabaseAuthProvider {
    pub fn new(client: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }

    fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.base_url)
    }
}

/// Clasifica la respuesta del grant `password`
///
/// Solo 400, 401 y 422 son credenciales rechazadas; 429 y el resto de
/// errores son fallos del proveedor.
fn check_token_status(status: StatusCode, body: &str) -> Result<(), AuthError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
            warn!("❌ Supabase rechazó las credenciales ({})", status);
            Err(AuthError::InvalidCredentials)
        }
        _ => Err(AuthError::Provider(format!("Supabase error {}: {}", status, body))),
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let url = self.token_url();
        info!("🔐 Autenticando {} contra Supabase", credentials.email);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Content-Type", "application/json")
            .json(&json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        debug!("📡 Supabase response status: {}", status);

        check_token_status(status, &response_text)?;

        let token: SupabaseTokenResponse = serde_json::from_str(&response_text)
            .map_err(|e| AuthError::Provider(format!("Error parsing Supabase response: {}", e)))?;

        Ok(AuthUser {
            id: token.user.id,
            email: token.user.email.unwrap_or_else(|| credentials.email.clone()),
            provider_token: Some(token.access_token),
        })
    }

    async fn sign_out(&self, user: &AuthUser) -> Result<(), AuthError> {
        let Some(token) = user.provider_token.as_deref() else {
            return Ok(());
        };

        let response = self
            .client
            .post(self.logout_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // El token remoto puede haber caducado ya; la sesión local se cierra igual
            warn!("⚠️ Supabase logout devolvió {}", status);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct LocalAccount {
    id: String,
    email: String,
    password_hash: String,
}

/// Proveedor en memoria con contraseñas bcrypt
pub struct LocalAuthProvider {
    accounts: HashMap<String, LocalAccount>,
    cost: u32,
}

impl LocalAuthProvider {
    pub fn new(cost: u32) -> Self {
        Self {
            accounts: HashMap::new(),
            cost,
        }
    }

    /// Registra una cuenta; el email se normaliza a minúsculas
    pub fn with_account(mut self, email: &str, password: &str) -> Result<Self, AuthError> {
        let email = email.trim().to_lowercase();
        let account = LocalAccount {
            id: format!("local_{}", self.accounts.len() + 1),
            email: email.clone(),
            password_hash: bcrypt::hash(password, self.cost)?,
        };
        self.accounts.insert(email, account);
        Ok(self)
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let email = credentials.email.trim().to_lowercase();
        let account = self.accounts.get(&email).ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(&credentials.password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthUser {
            id: account.id.clone(),
            email: account.email.clone(),
            provider_token: None,
        })
    }

    async fn sign_out(&self, _user: &AuthUser) -> Result<(), AuthError> {
        Ok(())
    }
}
