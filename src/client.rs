use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::fallback::sample_recipes;
use crate::model::Recipe;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    ingredients: &'a [String],
    filters: &'a [String],
}

/// A backend able to turn ingredients and filters into recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "http")
    fn source_name(&self) -> &str;

    /// Generate recipes for the given ingredients and active filters
    async fn generate(
        &self,
        ingredients: &[String],
        filters: &[String],
    ) -> Result<Vec<Recipe>, AppError>;
}

/// Talks to the recipe generation service over HTTP
pub struct HttpRecipeSource {
    client: Client,
    base_url: String,
}

impl HttpRecipeSource {
    /// Create a source from configuration (endpoint and timeout)
    pub fn new(config: &AppConfig) -> Self {
        Self::with_timeout(&config.endpoint, Duration::from_secs(config.timeout))
    }

    /// Create a source against a specific base URL with the default timeout
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(&base_url.into(), Duration::from_secs(30))
    }

    fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn generate(
        &self,
        ingredients: &[String],
        filters: &[String],
    ) -> Result<Vec<Recipe>, AppError> {
        let response = self
            .client
            .post(format!("{}/generate-recipes", self.base_url))
            .json(&GenerateRequest {
                ingredients,
                filters,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!("{:?}", body);
        match body.get("recipes") {
            Some(recipes) => Ok(serde_json::from_value(recipes.clone())?),
            None => Err(AppError::MalformedResponse(
                "response has no recipes field".to_string(),
            )),
        }
    }
}

/// Outcome of one fetch as seen by the view layer
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub recipes: Vec<Recipe>,
    /// True when the sample recipes were substituted for a failed fetch
    pub degraded: bool,
}

/// Client used by the view controller.
///
/// Transport failures, non-success statuses and schema-violating bodies all
/// collapse into one degraded outcome carrying the fixed sample recipes; the
/// caller never sees a fetch error.
pub struct RecipeClient {
    source: Box<dyn RecipeSource>,
}

impl RecipeClient {
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, ingredients: &[String], filters: &[String]) -> FetchOutcome {
        match self.source.generate(ingredients, filters).await {
            Ok(recipes) => {
                info!(
                    "Fetched {} recipes from {}",
                    recipes.len(),
                    self.source.source_name()
                );
                FetchOutcome {
                    recipes,
                    degraded: false,
                }
            }
            Err(e) => {
                warn!(
                    "Recipe fetch via {} failed, serving sample recipes: {}",
                    self.source.source_name(),
                    e
                );
                FetchOutcome {
                    recipes: sample_recipes(),
                    degraded: true,
                }
            }
        }
    }
}
