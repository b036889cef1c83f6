//! Request URLs for the CMS collection endpoint.
//!
//! Filters use the CMS's bracketed query syntax, e.g.
//! `filters[slug][$eq]=onion-soup`. Values are form-encoded, so slugs with
//! reserved characters survive the round trip.

use recipe_site_core::Locale;
use reqwest::Url;

use crate::error::GatewayError;

pub const RECIPES_PATH: &str = "/api/recipes";

/// One request against the recipe collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    locale: Locale,
    populate_image: bool,
    featured_only: bool,
    slug: Option<String>,
    fields: Vec<&'static str>,
    page: u32,
    page_size: u32,
}

impl RecipeQuery {
    /// Every recipe, with its featured image populated.
    pub fn all(locale: Locale) -> Self {
        Self {
            locale,
            populate_image: true,
            featured_only: false,
            slug: None,
            fields: Vec::new(),
            page: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }

    /// Recipes flagged as featured.
    pub fn featured(locale: Locale) -> Self {
        Self {
            featured_only: true,
            ..Self::all(locale)
        }
    }

    /// Exact slug match.
    pub fn by_slug(slug: &str, locale: Locale) -> Self {
        Self {
            slug: Some(slug.to_string()),
            page_size: 1,
            ..Self::all(locale)
        }
    }

    /// Lightweight enumeration returning only slugs and timestamps.
    pub fn slugs(locale: Locale) -> Self {
        Self {
            populate_image: false,
            fields: vec!["slug", "updatedAt"],
            ..Self::all(locale)
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Resolve against the CMS base address.
    pub fn to_url(&self, base: &Url) -> Result<Url, GatewayError> {
        let mut url = base.join(RECIPES_PATH).map_err(|e| GatewayError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            if self.populate_image {
                pairs.append_pair("populate", "featuredImage");
            }
            if self.featured_only {
                pairs.append_pair("filters[isFeatured][$eq]", "true");
            }
            if let Some(slug) = &self.slug {
                pairs.append_pair("filters[slug][$eq]", slug);
            }
            for (i, field) in self.fields.iter().enumerate() {
                pairs.append_pair(&format!("fields[{i}]"), field);
            }
            pairs.append_pair("locale", self.locale.code());
            pairs.append_pair("pagination[page]", &self.page.to_string());
            pairs.append_pair("pagination[pageSize]", &self.page_size.to_string());
        }

        Ok(url)
    }
}
