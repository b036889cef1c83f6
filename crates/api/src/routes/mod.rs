pub mod health;
pub mod pages;
pub mod seo;

use axum::Router;
use recipe_site_core::Locale;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(seo::routes())
        .merge(pages::routes())
        .with_state(state)
}

/// Resolve the locale path segment; unsupported locales are simply not pages.
pub(crate) fn parse_locale(code: &str) -> ApiResult<Locale> {
    code.parse()
        .map_err(|e: recipe_site_core::locale::UnknownLocale| ApiError::NotFound(e.to_string()))
}
