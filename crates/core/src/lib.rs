//! View models and pure data shaping for the recipe site.
//!
//! Nothing in this crate performs I/O: the CMS gateway feeds raw JSON in,
//! the site server takes view models and rendered SEO documents out.

pub mod filter;
pub mod locale;
pub mod media;
pub mod recipe;
pub mod rich_text;
pub mod seo;

pub use locale::Locale;
pub use media::{ImageRef, ImageSize};
pub use recipe::model::Recipe;
