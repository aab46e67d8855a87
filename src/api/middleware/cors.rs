//! Cross-origin access for the browser form.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
