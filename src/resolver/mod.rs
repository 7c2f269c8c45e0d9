//! Color name resolution subsystem.
//!
//! # Data Flow
//! ```text
//! request path segment ("cornflowerblue")
//!     → normalization (trim, ASCII lowercase)
//!     → ColorNameResolver::resolve
//!     → Rgb { r, g, b }
//!     → css_hex() ("#6495ed")
//! ```
//!
//! # Design Decisions
//! - The resolver is a trait so the name database can live in-process
//!   (the default) or behind a network boundary without touching handlers
//! - Resolution failures are per-request errors, never process-fatal
//! - The handler receives the resolver as an explicit `Arc` handle through
//!   server state; there is no global lookup table

pub mod table;
pub mod types;

pub use table::NamedColorTable;
pub use types::{ColorNameResolver, ResolveError, Rgb};
