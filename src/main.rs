//! Color lookup service binary.
//!
//! Resolves color names to their CSS hex form and serves an HTML swatch at
//! `GET /css/{name}`. Configuration is optional; with no config file the
//! server listens on 0.0.0.0:8080.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use swatch::config::{load_config, ServerConfig};
use swatch::lifecycle::Shutdown;
use swatch::observability::init_logging;
use swatch::resolver::NamedColorTable;
use swatch::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the first argument.
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };

    init_logging(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let resolver = Arc::new(NamedColorTable::new());
    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, resolver);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
