pub mod model;
pub mod normalize;
pub mod validate;

pub use model::{Recipe, SlugEntry};
pub use normalize::{normalize_collection, normalize_recipe, normalize_slug_entry};
