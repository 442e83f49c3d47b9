//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use setlist_common::{AppConfig, AppError, StorageBackend};
use setlist_db::{create_pool, run_migrations};
use setlist_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks sit outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = apply_middleware(api.merge(health_routes()), config);
    router.with_state(state)
}

/// Wire the storage backend named in configuration into a service context
pub async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    match config.storage {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            Ok(ServiceContext::in_memory())
        }
        StorageBackend::Postgres => {
            let db = config.database.as_ref().ok_or(AppError::MissingDatabase)?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db)
                .await
                .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

            if db.run_migrations {
                run_migrations(&pool, &db.migrations_dir)
                    .await
                    .map_err(|e| AppError::Migration(e.to_string()))?;
            }

            Ok(ServiceContext::postgres(pool))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = create_service_context(&config).await?;
    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|_| AppError::InvalidAddress(address.clone()))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
