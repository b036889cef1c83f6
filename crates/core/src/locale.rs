use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported site locales.
///
/// The set is closed: every recipe listing and lookup is scoped to exactly
/// one of these, and each locale's content is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
    Fr,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All locales in canonical order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Fr];

    pub const DEFAULT: Locale = Locale::En;

    /// The lowercase code used in URLs and CMS queries.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Alternate-language link for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub locale: Locale,
    pub href: String,
}

/// Build one alternate link per locale for `path` (which should start with `/`,
/// or be empty for the locale root).
pub fn hreflang_links(site_url: &str, path: &str) -> Vec<HreflangLink> {
    let site = site_url.trim_end_matches('/');
    Locale::ALL
        .iter()
        .map(|&locale| HreflangLink {
            locale,
            href: format!("{site}/{locale}{path}"),
        })
        .collect()
}
