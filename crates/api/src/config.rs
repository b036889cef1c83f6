use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use recipe_site_cms::config::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT};
use recipe_site_cms::{CmsConfig, Url};

const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Site configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// How to reach the CMS.
    pub cms: CmsConfig,
    /// Public address of the site, used in sitemap, robots and canonical links.
    pub site_url: Url,
    /// Pre-built sitemap served instead of generating one per request.
    pub sitemap_file: Option<PathBuf>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(k))
                .find(|v| !v.trim().is_empty())
        };

        let site_raw = var(&["SITE_URL", "NEXT_PUBLIC_SITE_URL"])
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site_url = Url::parse(&site_raw).map_err(|_| ConfigError::Invalid {
            var: "SITE_URL",
            expected: "absolute URL",
            value: site_raw.clone(),
        })?;

        let timeout_secs: u64 = parse_or(
            "CMS_TIMEOUT_SECS",
            var(&["CMS_TIMEOUT_SECS"]),
            DEFAULT_TIMEOUT.as_secs(),
        )?;

        Ok(Self {
            host: var(&["HOST"]).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", var(&["PORT"]), 3000)?,
            cms: CmsConfig {
                base_url: var(&["CMS_URL", "NEXT_PUBLIC_STRAPI_URL"]),
                skip_fetch: var(&["SKIP_CMS_FETCH"]).is_some_and(|v| v.trim() == "true"),
                timeout: Duration::from_secs(timeout_secs),
                page_size: parse_or("CMS_PAGE_SIZE", var(&["CMS_PAGE_SIZE"]), DEFAULT_PAGE_SIZE)?,
            },
            site_url,
            sitemap_file: var(&["SITEMAP_FILE"]).map(PathBuf::from),
            log_level: var(&["LOG_LEVEL"]).unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: name,
            expected: std::any::type_name::<T>(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.site_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.cms.base_url, None);
        assert!(!config.cms.skip_fetch);
        assert_eq!(config.cms.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.sitemap_file, None);
    }

    #[test]
    fn reads_cms_settings_and_aliases() {
        let config = load(&[
            ("NEXT_PUBLIC_STRAPI_URL", "http://strapi:1337"),
            ("NEXT_PUBLIC_SITE_URL", "https://recipes.example.com"),
            ("SKIP_CMS_FETCH", "true"),
            ("CMS_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.cms.base_url.as_deref(), Some("http://strapi:1337"));
        assert_eq!(config.site_url.host_str(), Some("recipes.example.com"));
        assert!(config.cms.skip_fetch);
        assert_eq!(config.cms.timeout, Duration::from_secs(3));
    }

    #[test]
    fn primary_names_win_over_aliases() {
        let config = load(&[
            ("CMS_URL", "http://primary:1337"),
            ("NEXT_PUBLIC_STRAPI_URL", "http://alias:1337"),
        ])
        .unwrap();
        assert_eq!(config.cms.base_url.as_deref(), Some("http://primary:1337"));
    }

    #[test]
    fn skip_fetch_requires_literal_true() {
        assert!(!load(&[("SKIP_CMS_FETCH", "1")]).unwrap().cms.skip_fetch);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("SITE_URL", "not a url")]),
            Err(ConfigError::Invalid { var: "SITE_URL", .. })
        ));
    }
}
