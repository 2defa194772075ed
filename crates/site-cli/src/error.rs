//! Error types for site-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from site-model
    #[error(transparent)]
    Model(#[from] site_model::Error),

    /// Error from site-fs
    #[error(transparent)]
    Fs(#[from] site_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
