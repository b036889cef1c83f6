//! Pre-build step: write `sitemap.xml` to disk so the server can serve it
//! without touching the CMS per request.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use recipe_site_cms::surface::generate_sitemap;
use recipe_site_cms::{ContentGateway, GatewayError};
use recipe_site_core::Locale;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "generate-sitemap", about = "Write the site's sitemap.xml from CMS content")]
pub struct SitemapArgs {
    /// Destination file.
    #[arg(short, long, default_value = "public/sitemap.xml")]
    pub output: PathBuf,

    /// Restrict to these locales (repeatable). Defaults to all.
    #[arg(short, long = "locale")]
    pub locales: Vec<Locale>,
}

/// Generate the sitemap and write it to `args.output`, returning the path.
///
/// Without a CMS address the sitemap still gets its static entries.
pub async fn run(args: SitemapArgs, config: &AppConfig) -> anyhow::Result<PathBuf> {
    let gateway = match ContentGateway::new(&config.cms) {
        Ok(gateway) => gateway,
        Err(GatewayError::NotConfigured) => {
            tracing::warn!("CMS_URL is not set; writing a sitemap with static pages only");
            ContentGateway::offline()
        }
        Err(e) => return Err(e).context("Failed to set up CMS gateway"),
    };

    let locales = if args.locales.is_empty() {
        Locale::ALL.to_vec()
    } else {
        args.locales
    };

    let xml = generate_sitemap(&gateway, &config.site_url, &locales).await;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&args.output, xml)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), "sitemap written");
    Ok(args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_site_cms::CmsConfig;

    fn config(cms: CmsConfig) -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "SITE_URL" => Some("https://recipes.example.com".to_string()),
            _ => None,
        })
        .map(|c| AppConfig { cms, ..c })
        .unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("recipe-site-{name}-{}", std::process::id()))
    }

    #[test]
    fn parses_output_and_repeated_locales() {
        let args = SitemapArgs::try_parse_from([
            "generate-sitemap",
            "-o",
            "out/sitemap.xml",
            "--locale",
            "es",
            "--locale",
            "fr",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out/sitemap.xml"));
        assert_eq!(args.locales, vec![Locale::Es, Locale::Fr]);

        let defaults = SitemapArgs::try_parse_from(["generate-sitemap"]).unwrap();
        assert_eq!(defaults.output, PathBuf::from("public/sitemap.xml"));
        assert!(defaults.locales.is_empty());

        assert!(SitemapArgs::try_parse_from(["generate-sitemap", "--locale", "de"]).is_err());
    }

    #[tokio::test]
    async fn missing_cms_address_still_writes_static_entries() {
        let dir = scratch_dir("static");
        let output = dir.join("nested").join("sitemap.xml");
        let args = SitemapArgs {
            output: output.clone(),
            locales: Vec::new(),
        };

        let written = run(args, &config(CmsConfig::default())).await.unwrap();
        assert_eq!(written, output);

        let xml = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(xml.matches("<url>").count(), 6);
        assert!(xml.contains("<loc>https://recipes.example.com/fr/recipes</loc>"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn selected_locales_limit_entries() {
        let dir = scratch_dir("locales");
        let output = dir.join("sitemap.xml");
        let args = SitemapArgs {
            output: output.clone(),
            locales: vec![Locale::Es],
        };

        run(args, &config(CmsConfig::offline())).await.unwrap();

        let xml = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://recipes.example.com/es</loc>"));
        assert!(!xml.contains("/en"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_cms_address_is_an_error() {
        let dir = scratch_dir("invalid");
        let args = SitemapArgs {
            output: dir.join("sitemap.xml"),
            locales: Vec::new(),
        };

        let err = run(args, &config(CmsConfig::online("not a url"))).await.unwrap_err();
        assert!(err.to_string().contains("CMS gateway"));
        assert!(!dir.join("sitemap.xml").exists());
    }
}
