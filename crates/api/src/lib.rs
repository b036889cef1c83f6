//! HTTP surface of the recipe site: locale-prefixed pages as JSON view
//! models, plus `robots.txt` and `sitemap.xml`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod prebuild;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;
use tower::ServiceBuilder;

/// Router with tracing and CORS layers applied.
pub fn app(state: state::AppState) -> Router {
    routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::request_tracing::trace_layer())
            .layer(middleware::cors::cors_layer()),
    )
}
