use serde::{Deserialize, Serialize};

/// A generated recipe as returned by the recipe service.
///
/// The title is the unique key within one result set; the liked-recipes
/// store keys on it. Instances are never mutated after they arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
