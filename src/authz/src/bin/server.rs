//! # Cluster-Scope Authorization Server
//!
//! Diagnostic HTTP front-end for the cluster-scope requirement aggregator.
//!
//! ## Endpoints
//!
//! - `POST /v1/requirements` - Operations and label requirements for a resource coordinate
//! - `GET /health` - Health check
//!
//! ## Configuration
//!
//! Environment variables:
//! - `PORT` - HTTP server port (default: 8080)
//! - `TENANTS_FILE` - JSON tenant definitions (default: none)
//! - `RUST_LOG` - Log level (default: info)

use axum::serve;
use std::net::SocketAddr;
use std::sync::Arc;
use tenant_proxy_authz::{
    server::{create_router, AppState},
    AuthzError, ServerConfig, TenantRegistry,
};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }

    info!("Starting graceful shutdown");
}

/// Main server entrypoint
#[tokio::main]
async fn main() -> Result<(), AuthzError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cluster-scope authorization server v{}", tenant_proxy_authz::VERSION);

    let config = ServerConfig::from_env();
    info!("Configuration:");
    info!("  Port: {}", config.port);
    info!("  Tenants file: {:?}", config.tenants_file);

    let tenants = config.load_tenants().map_err(|e| {
        error!("Failed to load tenants: {}", e);
        e
    })?;

    let state = AppState::new(Arc::new(TenantRegistry::with_tenants(tenants)));

    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind HTTP server: {}", e);
        e
    })?;

    serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("HTTP server error: {}", e);
            e
        })?;

    info!("Server shut down gracefully");
    Ok(())
}
