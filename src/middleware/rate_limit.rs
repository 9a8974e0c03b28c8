//! Middleware de Rate Limiting
//!
//! Ventana fija por IP. Se aplica al login de administración para frenar
//! intentos de fuerza bruta contra el proveedor de identidad.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Estructura para almacenar información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado global del rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
    trust_forwarded_for: bool,
}

impl RateLimitState {
    pub fn new(max_requests: u32, window_duration: Duration) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration,
            trust_forwarded_for: false,
        }
    }

    /// Usar `x-forwarded-for` antes que la IP del socket (detrás de un proxy)
    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(
            config.rate_limit_requests,
            Duration::from_secs(config.rate_limit_window),
        )
        .trusting_forwarded_for(config.rate_limit_trust_proxy)
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if info.requests >= self.max_requests {
            return Err(RateLimitError::LimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Errores de rate limiting
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded")]
    LimitExceeded,
}

fn forwarded_for(request: &Request) -> Option<String> {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

fn peer_addr(request: &Request) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// IP del cliente
///
/// Con `trust_forwarded_for` manda el primer salto de `x-forwarded-for`; si
/// no, la IP del socket. La cabecera solo se usa sin socket conocido.
pub fn client_ip(request: &Request, trust_forwarded_for: bool) -> String {
    let ip = if trust_forwarded_for {
        forwarded_for(request).or_else(|| peer_addr(request))
    } else {
        peer_addr(request).or_else(|| forwarded_for(request))
    };
    ip.unwrap_or_else(|| "unknown".to_string())
}

/// Middleware de rate limiting
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(&request, rate_limit_state.trust_forwarded_for);

    if let Err(RateLimitError::LimitExceeded) = rate_limit_state.check_rate_limit(&ip).await {
        warn!("🚫 Rate limit excedido para {} en {}", ip, request.uri().path());
        return Err(AppError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_limit_per_ip() {
        let state = RateLimitState::new(2, Duration::from_secs(60));

        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_err());
        assert!(state.check_rate_limit("10.0.0.2").await.is_ok());
    }

    #[tokio::test]
    async fn test_window_resets() {
        let state = RateLimitState::new(1, Duration::from_millis(20));

        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
        assert!(state.check_rate_limit("10.0.0.1").await.is_err());
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(state.check_rate_limit("10.0.0.1").await.is_ok());
    }

    fn request_from(peer: Option<&str>, forwarded: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder();
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        let mut request = builder.body(axum::body::Body::empty()).unwrap();
        if let Some(addr) = peer {
            let addr: SocketAddr = addr.parse().unwrap();
            request.extensions_mut().insert(ConnectInfo(addr));
        }
        request
    }

    #[test]
    fn test_client_ip_prefers_socket_address() {
        let request = request_from(Some("192.0.2.10:51000"), Some("203.0.113.7"));
        assert_eq!(client_ip(&request, false), "192.0.2.10");

        let request = request_from(Some("192.0.2.10:51000"), None);
        assert_eq!(client_ip(&request, false), "192.0.2.10");
    }

    #[test]
    fn test_client_ip_trusting_proxy_uses_first_forwarded_hop() {
        let request = request_from(Some("10.0.0.1:443"), Some("203.0.113.7, 10.0.0.1"));
        assert_eq!(client_ip(&request, true), "203.0.113.7");

        let request = request_from(Some("10.0.0.1:443"), None);
        assert_eq!(client_ip(&request, true), "10.0.0.1");
    }

    #[test]
    fn test_client_ip_without_socket() {
        let request = request_from(None, Some("203.0.113.7"));
        assert_eq!(client_ip(&request, false), "203.0.113.7");

        let request = request_from(None, None);
        assert_eq!(client_ip(&request, false), "unknown");
    }
}
