use thiserror::Error;

/// Errors that can occur inside the recipe suggestion engine
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to reach the recipe generation service
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service returned status {0}")]
    Status(u16),

    /// The service answered 2xx but the body had no usable recipe list
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Reading or writing the liked-recipes file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Failed to (de)serialize JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
