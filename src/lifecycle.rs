//! Process startup for the workspace app.

use tracing_subscriber::EnvFilter;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::io::HttpGateway;

/// Initialize logging with tracing_subscriber.
///
/// `RUST_LOG` takes precedence over the built-in directives.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("url_analyzer=debug,info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .try_init();

    if installed.is_err() {
        tracing::debug!("[LIFECYCLE] Tracing subscriber already installed");
    }
}

/// Builds the gateway the views share.
pub fn build_gateway() -> Result<HttpGateway> {
    let config = GatewayConfig::from_env();
    tracing::info!("[LIFECYCLE] Using analysis service at {}", config.base_url);
    HttpGateway::new(config)
}
