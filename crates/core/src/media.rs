use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference to an uploaded image: a base URL plus optional named variants
/// ("thumbnail", "small", "medium", "large") generated by the CMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub formats: BTreeMap<String, ImageFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFormat {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Rendering context an image is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Recipe cards in listings.
    Medium,
    /// Recipe detail view.
    Large,
}

impl ImageSize {
    pub fn format_name(&self) -> &'static str {
        match self {
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
        }
    }
}

impl ImageRef {
    /// Pick the URL for `size`: the named variant if present, else the base URL.
    pub fn url_for(&self, size: ImageSize) -> Option<&str> {
        self.formats
            .get(size.format_name())
            .and_then(|f| non_empty(f.url.as_deref()))
            .or_else(|| non_empty(self.url.as_deref()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Turn a possibly-relative media path into an absolute URL.
///
/// Paths that already start with `http` are returned untouched; anything else
/// is prefixed with the CMS base address.
pub fn resolve_media(base: &str, path: Option<&str>) -> Option<String> {
    let path = non_empty(path)?;
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{base}{path}"))
    } else {
        Some(format!("{base}/{path}"))
    }
}
