//! Mapping of raw CMS records onto [`Recipe`] view models.
//!
//! The CMS answers in two shapes depending on its version: attribute-wrapped
//! (`{"id": 1, "attributes": {...}}`) and flat (`{"id": 1, ...}`). Media
//! relations vary the same way. Every field falls back independently, so a
//! malformed value never takes the whole record down with it; only a missing
//! slug or title does.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::model::{Recipe, SlugEntry};
use super::validate::validate_recipe_fields;
use crate::media::ImageRef;
use crate::rich_text::RichTextBlock;

/// Normalize one record from a collection response.
///
/// Returns `None` when the record lacks a slug or title.
pub fn normalize_recipe(item: &Value) -> Option<Recipe> {
    let attrs = attributes(item);
    let id = item.get("id").and_then(Value::as_i64);
    let slug = str_field(attrs, "slug");
    let title = str_field(attrs, "title");

    if let Err(e) = validate_recipe_fields(slug, title) {
        tracing::debug!(?id, error = %e, "discarding incomplete recipe record");
        return None;
    }

    Some(Recipe {
        id,
        slug: slug?.to_string(),
        title: title?.to_string(),
        description: blocks(attrs, "description"),
        ingredients: blocks(attrs, "ingredients"),
        instructions: blocks(attrs, "instructions"),
        featured_image: featured_image(attrs),
        cuisine: str_field(attrs, "cusine")
            .or_else(|| str_field(attrs, "cuisine"))
            .unwrap_or_default()
            .to_string(),
        difficulty: str_field(attrs, "difficulty").unwrap_or_default().to_string(),
        cooking_time: minutes(attrs.get("cookingTime")),
        is_featured: attrs
            .get("isFeatured")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        updated_at: timestamp(attrs.get("updatedAt")),
    })
}

/// Normalize the `data` array of a collection response, keeping CMS order.
pub fn normalize_collection(document: &Value) -> Vec<Recipe> {
    data_items(document).filter_map(normalize_recipe).collect()
}

/// Normalize one record of a slug-only enumeration.
pub fn normalize_slug_entry(item: &Value) -> Option<SlugEntry> {
    let attrs = attributes(item);
    let slug = str_field(attrs, "slug").filter(|s| !s.is_empty())?;
    Some(SlugEntry {
        slug: slug.to_string(),
        updated_at: timestamp(attrs.get("updatedAt")),
    })
}

/// Iterate the records in a response's `data` array. Anything else yields nothing.
pub fn data_items(document: &Value) -> impl Iterator<Item = &Value> {
    document
        .get("data")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn attributes(item: &Value) -> &Value {
    match item.get("attributes") {
        Some(attrs @ Value::Object(_)) => attrs,
        _ => item,
    }
}

fn str_field<'a>(attrs: &'a Value, key: &str) -> Option<&'a str> {
    attrs.get(key).and_then(Value::as_str)
}

fn blocks(attrs: &Value, key: &str) -> Vec<RichTextBlock> {
    attrs
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|b| serde_json::from_value(b.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn featured_image(attrs: &Value) -> Option<ImageRef> {
    let raw = attrs.get("featuredImage")?;
    let raw = match raw.get("data") {
        Some(Value::Null) => return None,
        Some(data) => match data.get("attributes") {
            Some(inner @ Value::Object(_)) => inner,
            _ => data,
        },
        None => raw,
    };
    if !raw.is_object() {
        return None;
    }
    serde_json::from_value(raw.clone()).ok()
}

fn minutes(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value?.as_str()?.parse().ok()
}
