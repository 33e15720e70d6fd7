use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to reach the recipe API
    #[error("Request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe service error: {0}")]
    Api(String),

    /// Failed to decode a response or a stored record
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Local file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
