use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use crate::error::GatewayError;
use crate::query::RecipeQuery;

/// Upper bound on pages followed for one enumeration.
const MAX_PAGES: u32 = 50;

/// Thin HTTP client for the CMS REST API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base: Url,
    page_size: u32,
}

impl CmsClient {
    pub fn new(base_url: &str, timeout: Duration, page_size: u32) -> Result<Self, GatewayError> {
        let base = Url::parse(base_url).map_err(|e| GatewayError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self {
            http,
            base,
            page_size: page_size.max(1),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetch a single page for `query` exactly as given.
    pub async fn fetch(&self, query: &RecipeQuery) -> Result<Value, GatewayError> {
        let url = query.to_url(&self.base)?;
        self.get_json(url).await
    }

    /// Fetch every page of `query`, following `meta.pagination.pageCount`.
    pub async fn fetch_all(&self, query: RecipeQuery) -> Result<Vec<Value>, GatewayError> {
        let mut query = query.page_size(self.page_size).page(1);
        let mut documents = Vec::new();

        loop {
            let document = self.fetch(&query).await?;
            let page = query.current_page();
            let page_count = page_count(&document);
            documents.push(document);

            if page >= page_count {
                break;
            }
            if page >= MAX_PAGES {
                tracing::warn!(page_count, "stopping pagination at {MAX_PAGES} pages");
                break;
            }
            query = query.page(page + 1);
        }

        Ok(documents)
    }

    async fn get_json(&self, url: Url) -> Result<Value, GatewayError> {
        tracing::debug!(%url, "CMS request");

        let response = self.http.get(url.clone()).send().await.map_err(|source| {
            tracing::warn!(%url, error = %source, "CMS request failed");
            GatewayError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%url, status = status.as_u16(), body = %body, "CMS error response");
            return Err(GatewayError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| GatewayError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

/// Page count advertised by a collection response; 1 when absent.
fn page_count(document: &Value) -> u32 {
    document
        .pointer("/meta/pagination/pageCount")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(1)
}
