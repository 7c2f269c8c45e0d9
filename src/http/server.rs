//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener
//! - Dispatch requests to the color name resolver

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::response::{render_swatch, ServiceError};
use crate::resolver::ColorNameResolver;

/// Application state injected into handlers.
///
/// The resolver handle is constructed once at startup and shared read-only;
/// no request mutates it and nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ColorNameResolver>,
}

/// HTTP server for the color lookup service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and resolver.
    pub fn new(config: &ServerConfig, resolver: Arc<dyn ColorNameResolver>) -> Self {
        let state = AppState { resolver };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/css/{name}", get(css_color))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when `shutdown` fires, whichever comes first.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "serving color lookups");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {}
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /css/{name}` — resolve a color name and render its swatch.
async fn css_color(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, ServiceError> {
    tracing::debug!(name = %name, "resolving color name");

    let color = state.resolver.resolve(&name).inspect_err(|err| {
        tracing::warn!(name = %name, error = %err, "color lookup failed");
    })?;

    Ok(Html(render_swatch(color)))
}
