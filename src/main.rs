use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use driveease_rental::config::EnvironmentConfig;
use driveease_rental::repositories::vehicle_repository::VehicleRepository;
use driveease_rental::state::{build_auth_provider, AppState};
use driveease_rental::create_app;

const SESSION_CLEANUP_SECS: u64 = 300;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚗 DriveEase - API de alquiler de vehículos");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    if config.is_development() {
        warn!("⚠️ Modo desarrollo: revisa JWT_SECRET y LOCAL_ADMIN_PASSWORD antes de desplegar");
    }

    let catalog = VehicleRepository::load(config.catalog_path.as_deref())?;
    let provider = build_auth_provider(&config)?;

    let addr = config.server_url();
    let app_state = AppState::new(config, catalog, provider);

    // Limpieza periódica de sesiones expiradas
    let auth = app_state.auth.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SESSION_CLEANUP_SECS));
        loop {
            interval.tick().await;
            let removed = auth.cleanup_expired_sessions().await;
            if removed > 0 {
                info!("🧹 {} sesiones expiradas eliminadas", removed);
            }
        }
    });

    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Catálogo:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   GET  /api/vehicles/features - Características disponibles");
    info!("   GET  /api/vehicles/search - Buscar (query string)");
    info!("   POST /api/vehicles/search - Buscar (JSON)");
    info!("🏠 Landing:");
    info!("   GET  /api/content/{{featured,testimonials,highlights,landing}}");
    info!("   GET  /api/locations?q= - Sugerencias de recogida");
    info!("   POST /api/newsletter - Suscripción");
    info!("🔐 Administración:");
    info!("   POST /api/admin/login - Login");
    info!("   POST /api/admin/logout - Logout");
    info!("   GET  /api/admin/session - Sesión actual");
    info!("   GET  /api/admin/dashboard - Dashboard");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
