//! Content gateway for the recipe CMS and the static surface (sitemap,
//! robots) generated from it.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod query;
pub mod surface;

pub use config::CmsConfig;
pub use error::GatewayError;
pub use gateway::ContentGateway;
pub use reqwest::Url;
