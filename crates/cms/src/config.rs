use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// How the gateway reaches the CMS.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS base address, e.g. `http://localhost:1337`. Required unless
    /// `skip_fetch` is set.
    pub base_url: Option<String>,
    /// Serve empty results without touching the network.
    pub skip_fetch: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Records requested per page when enumerating collections.
    pub page_size: u32,
}

impl CmsConfig {
    pub fn online(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            skip_fetch: true,
            ..Self::default()
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_fetch: false,
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
