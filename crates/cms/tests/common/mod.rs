//! In-process stand-in for the CMS collection endpoint.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct FakeCms {
    recipes: Arc<HashMap<String, Vec<Value>>>,
    failing: Arc<HashSet<String>>,
    wrapped: bool,
}

impl FakeCms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat records served for `locale`.
    pub fn with_recipes(mut self, locale: &str, records: Vec<Value>) -> Self {
        Arc::make_mut(&mut self.recipes).insert(locale.to_string(), records);
        self
    }

    /// Answer HTTP 500 for every request in `locale`.
    pub fn failing(mut self, locale: &str) -> Self {
        Arc::make_mut(&mut self.failing).insert(locale.to_string());
        self
    }

    /// Serve records in the attribute-wrapped shape.
    pub fn wrapped(mut self) -> Self {
        self.wrapped = true;
        self
    }

    /// Bind to an ephemeral port and return the base URL.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/api/recipes", get(recipes))
            .with_state(self);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn recipe(id: i64, slug: &str, title: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "cusine": "French",
        "difficulty": "Easy",
        "cookingTime": 30,
        "isFeatured": false,
        "updatedAt": "2024-05-01T12:00:00.000Z",
        "featuredImage": {
            "url": format!("/uploads/{slug}.jpg"),
            "formats": { "medium": { "url": format!("/uploads/medium_{slug}.jpg") } }
        }
    })
}

pub fn featured(mut record: Value) -> Value {
    record["isFeatured"] = json!(true);
    record
}

async fn recipes(State(cms): State<FakeCms>, Query(q): Query<HashMap<String, String>>) -> Response {
    let locale = q.get("locale").cloned().unwrap_or_else(|| "en".to_string());
    if cms.failing.contains(&locale) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    let mut items = cms.recipes.get(&locale).cloned().unwrap_or_default();
    if let Some(slug) = q.get("filters[slug][$eq]") {
        items.retain(|r| r.get("slug").and_then(Value::as_str) == Some(slug.as_str()));
    }
    if q.get("filters[isFeatured][$eq]").map(String::as_str) == Some("true") {
        items.retain(|r| r.get("isFeatured").and_then(Value::as_bool) == Some(true));
    }

    let fields: Vec<&String> = (0..)
        .map_while(|i| q.get(&format!("fields[{i}]")))
        .collect();
    if !fields.is_empty() {
        items = items
            .into_iter()
            .map(|r| {
                let mut out = json!({ "id": r["id"] });
                for field in &fields {
                    out[field.as_str()] = r[field.as_str()].clone();
                }
                out
            })
            .collect();
    }

    let page: usize = q.get("pagination[page]").and_then(|p| p.parse().ok()).unwrap_or(1);
    let page_size: usize = q
        .get("pagination[pageSize]")
        .and_then(|p| p.parse().ok())
        .unwrap_or(25);
    let total = items.len();
    let page_count = total.div_ceil(page_size);
    let data: Vec<Value> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|r| if cms.wrapped { wrap(r) } else { r })
        .collect();

    Json(json!({
        "data": data,
        "meta": { "pagination": {
            "page": page,
            "pageSize": page_size,
            "pageCount": page_count,
            "total": total
        }}
    }))
    .into_response()
}

fn wrap(record: Value) -> Value {
    let mut attributes = record;
    let id = attributes
        .as_object_mut()
        .and_then(|o| o.remove("id"))
        .unwrap_or(Value::Null);
    if let Some(image) = attributes.get_mut("featuredImage") {
        let inner = image.take();
        *image = json!({ "data": { "id": 1, "attributes": inner } });
    }
    json!({ "id": id, "attributes": attributes })
}
