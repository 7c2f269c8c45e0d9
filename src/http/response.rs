//! Response rendering and error mapping.
//!
//! # Responsibilities
//! - Render the color swatch HTML fragment
//! - Map resolver failures to HTTP status codes
//!
//! # Design Decisions
//! - Unknown names get a deterministic 404 with a plain-text message;
//!   the same request always yields a byte-identical response
//! - Resolver outages are 503, fatal to the request only
//! - The fragment interpolates only `Rgb::css_hex` output, so the markup
//!   cannot be influenced by request input

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::resolver::{ResolveError, Rgb};

/// Render the swatch fragment for a resolved color.
///
/// The shape is a heading colored with the hex value and showing it as
/// text: `<h1 style="color: #ff0000" >#ff0000</h1>`.
pub fn render_swatch(color: Rgb) -> String {
    let hex = color.css_hex();
    format!("<h1 style=\"color: {0}\" >{0}</h1>", hex)
}

/// Handler-level error, convertible straight into an HTTP response.
#[derive(Debug)]
pub struct ServiceError(pub ResolveError);

impl From<ResolveError> for ServiceError {
    fn from(err: ResolveError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ResolveError::UnknownName { .. } => StatusCode::NOT_FOUND,
            ResolveError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.0.to_string()).into_response()
    }
}
