use recipe_site_core::media::resolve_media;
use recipe_site_core::recipe::normalize::data_items;
use recipe_site_core::recipe::{normalize_recipe, normalize_slug_entry, Recipe, SlugEntry};
use recipe_site_core::Locale;
use serde_json::Value;

use crate::client::CmsClient;
use crate::config::CmsConfig;
use crate::error::GatewayError;
use crate::query::RecipeQuery;

/// Single entry point for recipe content.
///
/// Raw CMS payloads never leave this type: callers get [`Recipe`] view models.
/// Cloning is cheap; the underlying HTTP client is reference counted.
#[derive(Debug, Clone)]
pub struct ContentGateway {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Online(CmsClient),
    /// Fetching disabled: every list is empty and every lookup misses.
    Offline,
}

impl ContentGateway {
    /// Build a gateway from configuration.
    ///
    /// Fails fast when no CMS address is configured and offline mode was not
    /// requested explicitly.
    pub fn new(config: &CmsConfig) -> Result<Self, GatewayError> {
        if config.skip_fetch {
            tracing::info!("CMS fetching disabled, serving empty content");
            return Ok(Self::offline());
        }

        let base_url = config
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(GatewayError::NotConfigured)?;

        let client = CmsClient::new(base_url, config.timeout, config.page_size)?;
        Ok(Self {
            backend: Backend::Online(client),
        })
    }

    pub fn offline() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self.backend, Backend::Offline)
    }

    /// All recipes for `locale`, in CMS order, incomplete records dropped.
    pub async fn list_all(&self, locale: Locale) -> Result<Vec<Recipe>, GatewayError> {
        self.list(RecipeQuery::all(locale)).await
    }

    /// Recipes flagged as featured for `locale`.
    pub async fn list_featured(&self, locale: Locale) -> Result<Vec<Recipe>, GatewayError> {
        self.list(RecipeQuery::featured(locale)).await
    }

    /// Look up a recipe by exact slug. `Ok(None)` means the CMS has no such
    /// recipe in that locale.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Recipe>, GatewayError> {
        let Backend::Online(client) = &self.backend else {
            return Ok(None);
        };
        if slug.is_empty() {
            return Ok(None);
        }

        let document = client.fetch(&RecipeQuery::by_slug(slug, locale)).await?;
        let recipe = data_items(&document)
            .filter_map(normalize_recipe)
            .find(|r| r.slug == slug);

        if recipe.is_none() {
            tracing::debug!(slug, %locale, "recipe not found");
        }
        Ok(recipe)
    }

    /// Slugs (and last-modified timestamps) of every recipe in `locale`.
    pub async fn list_slugs(&self, locale: Locale) -> Result<Vec<SlugEntry>, GatewayError> {
        let documents = self.fetch_all(RecipeQuery::slugs(locale)).await?;
        Ok(documents
            .iter()
            .flat_map(data_items)
            .filter_map(normalize_slug_entry)
            .collect())
    }

    /// Absolute URL for a media path returned by the CMS.
    pub fn media_url(&self, path: Option<&str>) -> Option<String> {
        match &self.backend {
            Backend::Online(client) => resolve_media(client.base_url().as_str(), path),
            Backend::Offline => path
                .filter(|p| p.starts_with("http"))
                .map(str::to_string),
        }
    }

    /// Cheap reachability probe: a one-record slug listing.
    pub async fn ping(&self) -> Result<(), GatewayError> {
        let Backend::Online(client) = &self.backend else {
            return Ok(());
        };
        client
            .fetch(&RecipeQuery::slugs(Locale::DEFAULT).page_size(1))
            .await
            .map(|_| ())
    }

    async fn list(&self, query: RecipeQuery) -> Result<Vec<Recipe>, GatewayError> {
        let documents = self.fetch_all(query).await?;
        let recipes: Vec<Recipe> = documents
            .iter()
            .flat_map(data_items)
            .filter_map(normalize_recipe)
            .collect();
        tracing::debug!(count = recipes.len(), "recipes listed");
        Ok(recipes)
    }

    async fn fetch_all(&self, query: RecipeQuery) -> Result<Vec<Value>, GatewayError> {
        match &self.backend {
            Backend::Online(client) => client.fetch_all(query).await,
            Backend::Offline => Ok(Vec::new()),
        }
    }
}
