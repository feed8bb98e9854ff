//! Application error types and result alias.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur during a migration run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure on an outbound call
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed response body where JSON was expected
    #[error("Failed to decode server response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success status from a search or asset download
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Target server refused a component-creation request
    #[error("Upload rejected with status {status} for {group}:{name}:{version}")]
    UploadRejected {
        status: u16,
        group: String,
        name: String,
        version: String,
    },
}
