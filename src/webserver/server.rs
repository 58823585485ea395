/// Axum webserver lifecycle
///
/// Binds the listener and serves the API router until the process exits.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::logger::{self, LogTag};
use crate::webserver::{routes, state::AppState};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Start the webserver; blocks until the server stops
pub async fn start_server(state: Arc<AppState>, host: &str, port: u16) -> Result<(), String> {
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("Invalid bind address {}:{}: {}", host, port, e))?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            format!(
                "Failed to bind to {}: address already in use (is another wishtracker running?)",
                addr
            )
        } else {
            format!("Failed to bind to {}: {}", addr, e)
        }
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("Listening on http://{}", addr),
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}

fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(CorsLayer::permissive())
}
