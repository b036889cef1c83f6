use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. The site is read-only, so any origin may GET.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
}
