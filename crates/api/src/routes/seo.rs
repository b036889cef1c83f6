use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use recipe_site_cms::surface::{generate_robots, generate_sitemap};
use recipe_site_core::Locale;

use crate::state::AppState;

/// Crawler-facing documents.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap))
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        generate_robots(&state.config().site_url),
    )
}

/// Serve the pre-built sitemap when one is configured and readable,
/// otherwise build it now.
async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let prebuilt = match &state.config().sitemap_file {
        Some(path) => match tokio::fs::read_to_string(path).await {
            Ok(xml) => Some(xml),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "pre-built sitemap unreadable, generating");
                None
            }
        },
        None => None,
    };

    let xml = match prebuilt {
        Some(xml) => xml,
        None => generate_sitemap(state.gateway(), &state.config().site_url, &Locale::ALL).await,
    };

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
