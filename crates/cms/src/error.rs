use thiserror::Error;

/// Failures talking to the CMS.
///
/// A record that is simply absent is not an error: lookups return
/// `Ok(None)` for that, so callers can tell "not found" from "backend down".
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("CMS base address is not configured (set CMS_URL or enable SKIP_CMS_FETCH)")]
    NotConfigured,

    #[error("invalid CMS address {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("CMS returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
