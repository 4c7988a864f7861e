use game_shelf_core::ResolveError;

/// Errors that can occur while talking to the IGDB API.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited by IGDB API")]
    RateLimit,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

// The resolver sees every transport-level problem as one failure kind;
// the detail survives only in the message.
impl From<CatalogError> for ResolveError {
    fn from(err: CatalogError) -> Self {
        ResolveError::CatalogUnavailable {
            message: err.to_string(),
        }
    }
}
