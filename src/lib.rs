pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod filters;
pub mod ingredients;
pub mod likes;
pub mod model;
pub mod storage;

pub use app::{App, AppBuilder, AppEvent, FetchState};
pub use catalog::{COMMON_INGREDIENTS, DIETARY_FILTERS};
pub use client::{FetchOutcome, HttpRecipeSource, RecipeClient, RecipeSource};
pub use config::AppConfig;
pub use error::AppError;
pub use fallback::sample_recipes;
pub use filters::FilterSet;
pub use ingredients::IngredientList;
pub use likes::LikedRecipes;
pub use model::Recipe;
pub use storage::{JsonFileStorage, LikeStorage, MemoryStorage};

/// Runs one fetch against the configured endpoint without assembling an
/// [`App`]. Failures degrade to the sample recipes like every other fetch;
/// only configuration loading can error.
pub async fn fetch_recipes(
    ingredients: &[String],
    filters: &[String],
) -> Result<FetchOutcome, AppError> {
    let config = AppConfig::load()?;
    let client = RecipeClient::new(Box::new(HttpRecipeSource::new(&config)));
    Ok(client.fetch(ingredients, filters).await)
}
