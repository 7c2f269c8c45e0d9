//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → GET /css/{name} handler
//!     → resolver (name → Rgb)
//!     → response.rs (HTML fragment, error mapping)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::ServiceError;
pub use server::HttpServer;
