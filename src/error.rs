use thiserror::Error;

/// Error categorization for the catalog adapters
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (permanent failures)
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors (usually permanent)
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // Network errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Upstream returned a non-success status
    #[error("{service} returned HTTP {status}")]
    UpstreamStatus { service: String, status: u16 },

    // Parse errors
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    // Client errors (permanent)
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },
}

impl Error {
    /// Whether the failure originated on the remote side rather than locally
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::UpstreamStatus { .. } | Error::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
