//! HTTP server initialization and runtime setup.
//!
//! Builds the todo store and postal-code client, wires them into the router,
//! and runs the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::{PincodeClient, TodoRepository};
use crate::infrastructure::http::HttpPincodeClient;
use crate::infrastructure::persistence::InMemoryTodoRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the postal-code client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let todo_repository: Arc<dyn TodoRepository> =
        Arc::new(InMemoryTodoRepository::seeded(config.todo_seed_count));

    let pincode_client: Arc<dyn PincodeClient> = Arc::new(
        HttpPincodeClient::new(&config.pincode_api_url, config.pincode_timeout())
            .context("Failed to initialize pincode API client")?,
    );

    Ok(AppState::new(todo_repository, pincode_client))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The pincode client cannot be built
/// - The listen address is invalid or cannot be bound
/// - The server fails at runtime
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
