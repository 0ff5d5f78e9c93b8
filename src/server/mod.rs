//! HTTP API consumed by the browser UI.
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/config` - every configured file
//! - `GET /api/config/:file_name` - one file
//! - `POST /api/config/save` - replace a file from `{fileName, items}`

pub mod handlers;
pub mod responses;

#[cfg(test)]
mod tests;

use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::settings::Settings;
use axum::{
    Router,
    routing::{get, post},
};
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ConsoleContext>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(ctx: ConsoleContext, settings: Settings) -> Self {
        Self {
            ctx: Arc::new(ctx),
            settings: Arc::new(settings),
        }
    }
}

/// Build the API router. The UI is served from another origin, so CORS is open.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/config", get(handlers::list_configs))
        .route("/api/config/save", post(handlers::save_config))
        .route("/api/config/:file_name", get(handlers::get_config))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let host_addr: IpAddr = host.parse().map_err(|e| {
        ConsoleError::UserError(format!("invalid host address '{}': {}", host, e))
    })?;
    let addr = SocketAddr::from((host_addr, port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ConsoleError::ServerError(format!("failed to bind {}: {}", addr, e)))?;

    tracing::info!(%addr, recipe_dir = %state.ctx.recipe_dir.display(), "server listening");
    println!("hummingbird API at http://{}", addr);
    println!("Press Ctrl+C to stop");

    if state.settings.audit_log {
        let event = Event::new(EventAction::Serve).with_details(json!({
            "addr": addr.to_string(),
        }));
        if let Err(e) = append_event(&state.ctx, &event) {
            tracing::warn!(error = %e, "failed to append audit event");
        }
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ConsoleError::ServerError(e.to_string()))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
