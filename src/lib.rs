//! Color name lookup service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolver;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resolver::{ColorNameResolver, NamedColorTable, ResolveError, Rgb};
