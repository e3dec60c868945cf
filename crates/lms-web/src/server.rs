//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use lms_core::{Config, Result};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the application state cannot be built.
pub fn build_app(config: Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config)?);

    Ok(build_routes().with_state(state))
}

/// Bind the configured address and serve until the process is stopped
///
/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot be bound,
/// or the server fails.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| lms_core::Error::Configuration {
            message: format!(
                "Invalid server address '{}:{}': {e}",
                config.server.host, config.server.port
            ),
        })?;

    let app = build_app(config)?;

    info!("Starting LMS dashboard on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
