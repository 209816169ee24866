pub mod images;
pub mod recommender;

pub use images::{ImageIndex, ImageLookup, NoImages};
pub use recommender::{CatalogRecommender, RecipeRecommender, recipes_from_json};
