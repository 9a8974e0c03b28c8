use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{AdminSession, JwtClaims};
use crate::utils::errors::AppError;

/// Duración máxima de una sesión (un año)
const MAX_SESSION_SECS: i64 = 365 * 24 * 3600;

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub session_duration: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            session_duration: Duration::seconds(
                i64::try_from(expiration_secs)
                    .unwrap_or(MAX_SESSION_SECS)
                    .min(MAX_SESSION_SECS),
            ),
        }
    }
}

/// Servicio JWT para los tokens de sesión del área de administración
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn session_duration(&self) -> Duration {
        self.config.session_duration
    }

    /// Genera el token de una sesión
    pub fn generate_session_token(&self, session: &AdminSession) -> Result<String, AppError> {
        let claims = JwtClaims {
            sub: session.user_id.clone(),
            sid: session.session_id.clone(),
            email: session.email.clone(),
            is_admin: session.is_admin,
            exp: session.expires_at.timestamp(),
            iat: session.created_at.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating session token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(expires_in: Duration) -> AdminSession {
        let now = Utc::now();
        AdminSession {
            session_id: "sid-1".to_string(),
            user_id: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            is_admin: true,
            provider_token: None,
            created_at: now,
            expires_at: now + expires_in,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt = JwtService::new(JwtConfig::new("test-secret", 3600));
        let token = jwt.generate_session_token(&session(Duration::hours(1))).unwrap();
        assert!(!token.is_empty());

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.sid, "sid-1");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = JwtService::new(JwtConfig::new("secret-a", 3600));
        let verifier = JwtService::new(JwtConfig::new("secret-b", 3600));
        let token = issuer.generate_session_token(&session(Duration::hours(1))).unwrap();

        assert!(matches!(verifier.validate_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = JwtService::new(JwtConfig::new("test-secret", 3600));
        let token = jwt.generate_session_token(&session(Duration::hours(-2))).unwrap();
        assert!(jwt.validate_token(&token).is_err());
    }
}
