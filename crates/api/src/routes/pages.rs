use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use recipe_site_core::filter::RecipeFilter;
use recipe_site_core::locale::hreflang_links;
use recipe_site_core::Locale;

use super::parse_locale;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::views::{ContentStatus, HomePage, RecipeCard, RecipePage, SearchPage};

/// Locale-prefixed site pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/{locale}", get(home))
        .route("/{locale}/recipes", get(legacy_index))
        .route("/{locale}/recipes/{slug}", get(recipe_detail))
        .route("/{locale}/search", get(search))
}

async fn root() -> Redirect {
    Redirect::permanent(&format!("/{}", Locale::DEFAULT))
}

/// Featured recipes. A CMS outage renders an empty, flagged listing.
async fn home(State(state): State<AppState>, Path(locale): Path<String>) -> ApiResult<Json<HomePage>> {
    let locale = parse_locale(&locale)?;
    let gateway = state.gateway();
    let site = &state.config().site_url;

    let (status, recipes) = match gateway.list_featured(locale).await {
        Ok(recipes) => (ContentStatus::Ok, recipes),
        Err(e) => {
            tracing::warn!(%locale, error = %e, "featured recipes unavailable");
            (ContentStatus::Unavailable, Vec::new())
        }
    };

    Ok(Json(HomePage {
        locale,
        status,
        recipes: recipes
            .iter()
            .map(|r| RecipeCard::build(r, locale, gateway, site))
            .collect(),
        alternates: hreflang_links(site.as_str(), ""),
    }))
}

/// The old recipe index has no page of its own anymore.
async fn legacy_index(Path(locale): Path<String>) -> ApiResult<Redirect> {
    let locale = parse_locale(&locale)?;
    Ok(Redirect::permanent(&format!("/{locale}")))
}

async fn recipe_detail(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> ApiResult<Json<RecipePage>> {
    let locale = parse_locale(&locale)?;
    let gateway = state.gateway();

    let recipe = gateway
        .get_by_slug(&slug, locale)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("recipe {slug:?} in locale {locale}")))?;

    Ok(Json(RecipePage::build(
        &recipe,
        locale,
        gateway,
        &state.config().site_url,
    )))
}

/// Filter the locale's full recipe list by title text and category.
async fn search(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(filter): Query<RecipeFilter>,
) -> ApiResult<Json<SearchPage>> {
    let locale = parse_locale(&locale)?;
    let gateway = state.gateway();

    let (status, all) = match gateway.list_all(locale).await {
        Ok(all) => (ContentStatus::Ok, all),
        Err(e) => {
            tracing::warn!(%locale, error = %e, "recipe list unavailable");
            (ContentStatus::Unavailable, Vec::new())
        }
    };

    Ok(Json(SearchPage::build(
        &all,
        &filter,
        status,
        locale,
        gateway,
        &state.config().site_url,
    )))
}
