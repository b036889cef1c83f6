//! Static surface generation: the sitemap and robots documents crawlers see.
//!
//! Runs either at request time or as a pre-build step. A locale whose slug
//! enumeration fails only loses its recipe entries; the run itself never
//! fails.

use recipe_site_core::seo::{render_robots, render_sitemap, ChangeFreq, SitemapEntry};
use recipe_site_core::Locale;
use reqwest::Url;

use crate::gateway::ContentGateway;

/// Absolute URL of a site page made of `segments`, each percent-encoded as a
/// single path segment.
pub fn page_url(site: &Url, segments: &[&str]) -> String {
    let mut url = site.clone();
    url.set_query(None);
    url.set_fragment(None);
    match url.path_segments_mut() {
        Ok(mut path) => {
            path.pop_if_empty().extend(segments);
        }
        Err(()) => {
            return format!("{}/{}", site.as_str().trim_end_matches('/'), segments.join("/"));
        }
    }
    url.to_string()
}

/// Entries for every locale: home and recipe index first (for all locales, in
/// order), then one entry per recipe slug the CMS reports.
pub async fn collect_entries(
    gateway: &ContentGateway,
    site: &Url,
    locales: &[Locale],
) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();

    for locale in locales {
        entries.push(SitemapEntry::new(
            page_url(site, &[locale.code()]),
            ChangeFreq::Daily,
            1.0,
        ));
        entries.push(SitemapEntry::new(
            page_url(site, &[locale.code(), "recipes"]),
            ChangeFreq::Weekly,
            0.9,
        ));
    }

    for &locale in locales {
        match gateway.list_slugs(locale).await {
            Ok(slugs) => {
                tracing::debug!(%locale, count = slugs.len(), "sitemap slugs enumerated");
                entries.extend(slugs.into_iter().map(|entry| {
                    SitemapEntry::new(
                        page_url(site, &[locale.code(), "recipes", entry.slug.as_str()]),
                        ChangeFreq::Weekly,
                        0.8,
                    )
                    .with_lastmod(entry.updated_at.map(|t| t.date_naive()))
                }));
            }
            Err(e) => {
                tracing::warn!(%locale, error = %e, "skipping recipe entries for locale");
            }
        }
    }

    entries
}

/// Full sitemap document.
pub async fn generate_sitemap(gateway: &ContentGateway, site: &Url, locales: &[Locale]) -> String {
    let entries = collect_entries(gateway, site, locales).await;
    tracing::info!(entries = entries.len(), "sitemap generated");
    render_sitemap(&entries)
}

/// Robots directives pointing at the site's sitemap.
pub fn generate_robots(site: &Url) -> String {
    render_robots(site.as_str())
}
