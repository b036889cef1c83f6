use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::media::ImageRef;
use crate::rich_text::RichTextBlock;

/// Caller-facing shape of a recipe, independent of how the CMS wrapped it.
///
/// Only the gateway builds these; a `Recipe` always has a non-empty slug and
/// title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<i64>,
    pub slug: String,
    pub title: String,
    pub description: Vec<RichTextBlock>,
    pub ingredients: Vec<RichTextBlock>,
    pub instructions: Vec<RichTextBlock>,
    pub featured_image: Option<ImageRef>,
    /// Used as the category in search.
    pub cuisine: String,
    pub difficulty: String,
    /// Minutes.
    pub cooking_time: Option<u32>,
    pub is_featured: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result row of the lightweight slug enumeration used for sitemaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugEntry {
    pub slug: String,
    pub updated_at: Option<DateTime<Utc>>,
}
