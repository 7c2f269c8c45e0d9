//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use swatch::config::ServerConfig;
use swatch::lifecycle::Shutdown;
use swatch::resolver::NamedColorTable;
use swatch::HttpServer;

/// Spawn a service instance on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// is enough to let the test end, triggering it stops the server cleanly.
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServerConfig::default();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&config, Arc::new(NamedColorTable::new()));

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
