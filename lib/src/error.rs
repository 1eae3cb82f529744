/// Error type for the pinku library
///
/// Everything that can abort an import run ends up here. Per-record insert
/// failures are not errors at this level; they are collected in the import report.
#[derive(Debug, thiserror::Error)]
pub enum PinkuError {
    /// Database-related errors (SQLite)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O errors (config and database files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Pinboard answered with a non-success status
    #[error("Pinboard API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using PinkuError
pub type Result<T> = std::result::Result<T, PinkuError>;

impl From<String> for PinkuError {
    fn from(s: String) -> Self {
        PinkuError::Other(s)
    }
}

impl From<&str> for PinkuError {
    fn from(s: &str) -> Self {
        PinkuError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for PinkuError {
    fn from(err: serde_yaml::Error) -> Self {
        PinkuError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for PinkuError {
    fn from(err: serde_json::Error) -> Self {
        PinkuError::Json(err.to_string())
    }
}
