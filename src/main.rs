use std::sync::Arc;

use anyhow::{anyhow, Result};

use wishtracker::{
    arguments::{get_arg_value, is_help_requested, print_help},
    logger::{self, LogTag},
    webserver::{
        self,
        server::{DEFAULT_HOST, DEFAULT_PORT},
        AppState,
    },
};

/// Main entry point for wishtracker
///
/// Startup order matters: logger first, then avatar preload (non-fatal),
/// then the webserver, which blocks until shutdown.
#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    if is_help_requested() {
        print_help();
        return Ok(());
    }

    logger::info(LogTag::System, "wishtracker starting up");

    let state = Arc::new(
        AppState::new().map_err(|e| anyhow!("failed to build HTTP client: {}", e))?,
    );

    // Placeholder avatars still work if the icon endpoints are unreachable
    if let Err(e) = state.avatars.preload().await {
        logger::warning(LogTag::Avatars, &format!("Avatar preload failed: {}", e));
    }

    let host = get_arg_value("--host").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = get_arg_value("--port")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    webserver::start_server(state, &host, port).await.map_err(|e| {
        logger::error(LogTag::Webserver, &e);
        anyhow!(e)
    })
}
