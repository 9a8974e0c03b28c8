//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

/// Secreto usado solo fuera de producción cuando falta `JWT_SECRET`
const DEVELOPMENT_JWT_SECRET: &str = "driveease-development-secret-change-me";

/// Errores de configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Proveedor de identidad del login de administración
#[derive(Debug, Clone, PartialEq)]
pub enum AuthProviderConfig {
    Local { admin_password: String },
    Supabase { url: String, anon_key: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub rate_limit_trust_proxy: bool,
    pub admin_email: String,
    pub auth_provider: AuthProviderConfig,
    pub catalog_path: Option<String>,
}

impl EnvironmentConfig {
    /// Lee la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Lee la configuración de un mapa (tests)
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = get("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let is_production = environment == "production";

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if is_production => return Err(ConfigError::Missing("JWT_SECRET")),
            None => DEVELOPMENT_JWT_SECRET.to_string(),
        };

        let auth_provider = match get("AUTH_PROVIDER").as_deref().unwrap_or("local") {
            "local" => AuthProviderConfig::Local {
                admin_password: get("LOCAL_ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string()),
            },
            "supabase" => AuthProviderConfig::Supabase {
                url: get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                anon_key: get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    name: "AUTH_PROVIDER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            port: parse_or("PORT", get("PORT"), 3000)?,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            jwt_secret,
            jwt_expiration: parse_or("JWT_EXPIRATION", get("JWT_EXPIRATION"), 86_400)?,
            cors_origins: get("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_requests: parse_or("RATE_LIMIT_REQUESTS", get("RATE_LIMIT_REQUESTS"), 10)?,
            rate_limit_window: parse_or("RATE_LIMIT_WINDOW", get("RATE_LIMIT_WINDOW"), 60)?,
            rate_limit_trust_proxy: parse_or("RATE_LIMIT_TRUST_PROXY", get("RATE_LIMIT_TRUST_PROXY"), false)?,
            admin_email: get("ADMIN_EMAIL").unwrap_or_else(|| "admin@example.com".to_string()),
            auth_provider,
            catalog_path: get("CATALOG_PATH"),
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::from_map(&HashMap::new()).unwrap();
        assert!(config.is_development());
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.admin_email, "admin@example.com");
        assert_eq!(config.rate_limit_requests, 10);
        assert!(!config.rate_limit_trust_proxy);
        assert!(config.cors_origins.is_empty());
        assert_eq!(
            config.auth_provider,
            AuthProviderConfig::Local {
                admin_password: "admin123".to_string()
            }
        );
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let err = EnvironmentConfig::from_map(&vars(&[("ENVIRONMENT", "production")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));

        let config = EnvironmentConfig::from_map(&vars(&[
            ("ENVIRONMENT", "production"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_supabase_provider_requires_url_and_key() {
        let err = EnvironmentConfig::from_map(&vars(&[("AUTH_PROVIDER", "supabase")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_URL")));

        let config = EnvironmentConfig::from_map(&vars(&[
            ("AUTH_PROVIDER", "supabase"),
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert!(matches!(config.auth_provider, AuthProviderConfig::Supabase { .. }));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            EnvironmentConfig::from_map(&vars(&[("PORT", "eighty")])),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(matches!(
            EnvironmentConfig::from_map(&vars(&[("AUTH_PROVIDER", "ldap")])),
            Err(ConfigError::Invalid { name: "AUTH_PROVIDER", .. })
        ));
        assert!(matches!(
            EnvironmentConfig::from_map(&vars(&[("RATE_LIMIT_TRUST_PROXY", "yes")])),
            Err(ConfigError::Invalid { name: "RATE_LIMIT_TRUST_PROXY", .. })
        ));
    }

    #[test]
    fn test_cors_origins_are_split() {
        let config = EnvironmentConfig::from_map(&vars(&[(
            "CORS_ORIGINS",
            "http://localhost:5173, https://driveease.example ,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://driveease.example"]
        );
    }
}
