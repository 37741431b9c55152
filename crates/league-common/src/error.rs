//! Error types for league-media services.

use thiserror::Error;

/// Result type alias using LeagueError.
pub type LeagueResult<T> = Result<T, LeagueError>;

/// Primary error type for league content operations.
#[derive(Debug, Error)]
pub enum LeagueError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Content not found: {0}")]
    ContentNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // === Storage Errors ===
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl LeagueError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            LeagueError::MissingParameter(_) | LeagueError::InvalidParameter { .. } => 400,
            LeagueError::Unauthorized(_) => 401,
            LeagueError::ContentNotFound(_) => 404,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for LeagueError {
    fn from(err: std::io::Error) -> Self {
        LeagueError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for LeagueError {
    fn from(err: serde_json::Error) -> Self {
        LeagueError::InternalError(format!("JSON error: {}", err))
    }
}
