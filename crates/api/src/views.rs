//! Page view models served by the site routes.

use recipe_site_cms::surface::page_url;
use recipe_site_cms::{ContentGateway, Url};
use recipe_site_core::filter::{categories, RecipeFilter};
use recipe_site_core::locale::HreflangLink;
use recipe_site_core::rich_text::{ingredient_lines, instruction_lines, lines};
use recipe_site_core::{ImageSize, Locale, Recipe};
use serde::Serialize;

/// Whether list content could be loaded. Listings degrade to empty instead of
/// failing, but say so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentStatus {
    Ok,
    Unavailable,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub id: Option<i64>,
    pub slug: String,
    pub title: String,
    pub href: String,
    pub image_url: Option<String>,
    pub cuisine: String,
    pub difficulty: String,
    pub cooking_time: Option<u32>,
}

impl RecipeCard {
    pub fn build(recipe: &Recipe, locale: Locale, gateway: &ContentGateway, site: &Url) -> Self {
        let image = recipe
            .featured_image
            .as_ref()
            .and_then(|img| img.url_for(ImageSize::Medium));
        Self {
            id: recipe.id,
            slug: recipe.slug.clone(),
            title: recipe.title.clone(),
            href: page_url(site, &[locale.code(), "recipes", recipe.slug.as_str()]),
            image_url: gateway.media_url(image),
            cuisine: recipe.cuisine.clone(),
            difficulty: recipe.difficulty.clone(),
            cooking_time: recipe.cooking_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub locale: Locale,
    pub status: ContentStatus,
    pub recipes: Vec<RecipeCard>,
    pub alternates: Vec<HreflangLink>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePage {
    pub locale: Locale,
    pub slug: String,
    pub title: String,
    pub canonical_url: String,
    pub image_url: Option<String>,
    pub image_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    pub description: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub alternates: Vec<HreflangLink>,
}

impl RecipePage {
    pub fn build(recipe: &Recipe, locale: Locale, gateway: &ContentGateway, site: &Url) -> Self {
        let image = recipe.featured_image.as_ref();
        let image_url = gateway.media_url(image.and_then(|img| img.url_for(ImageSize::Large)));
        let image_alt = image
            .and_then(|img| img.alternative_text.clone())
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| recipe.title.clone());

        Self {
            locale,
            slug: recipe.slug.clone(),
            title: recipe.title.clone(),
            canonical_url: page_url(site, &[locale.code(), "recipes", recipe.slug.as_str()]),
            image_url,
            image_alt,
            cuisine: non_empty(&recipe.cuisine),
            difficulty: non_empty(&recipe.difficulty),
            cooking_time: recipe.cooking_time,
            description: lines(&recipe.description),
            ingredients: ingredient_lines(&recipe.ingredients),
            instructions: instruction_lines(&recipe.instructions),
            alternates: recipe_alternates(site, &recipe.slug),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub locale: Locale,
    pub status: ContentStatus,
    pub query: String,
    pub category: Option<String>,
    pub categories: Vec<String>,
    pub total: usize,
    pub recipes: Vec<RecipeCard>,
}

impl SearchPage {
    pub fn build(
        all: &[Recipe],
        filter: &RecipeFilter,
        status: ContentStatus,
        locale: Locale,
        gateway: &ContentGateway,
        site: &Url,
    ) -> Self {
        let hits: Vec<RecipeCard> = filter
            .apply(all)
            .into_iter()
            .map(|r| RecipeCard::build(r, locale, gateway, site))
            .collect();
        Self {
            locale,
            status,
            query: filter.text.clone(),
            category: filter.category.clone().filter(|c| !c.is_empty()),
            categories: categories(all),
            total: hits.len(),
            recipes: hits,
        }
    }
}

/// One alternate per locale for a recipe page, with the slug percent-encoded
/// the same way as the canonical URL.
fn recipe_alternates(site: &Url, slug: &str) -> Vec<HreflangLink> {
    Locale::ALL
        .iter()
        .map(|&locale| HreflangLink {
            locale,
            href: page_url(site, &[locale.code(), "recipes", slug]),
        })
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
