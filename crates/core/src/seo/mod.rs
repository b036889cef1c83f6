//! Crawler-facing documents: sitemap XML and robots directives.

pub mod robots;
pub mod sitemap;

pub use robots::render_robots;
pub use sitemap::{render_sitemap, ChangeFreq, SitemapEntry};
