/*!
 * Error types for the caption extractor.
 *
 * This module contains custom error types for the extraction pipeline and the
 * command-line application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while resolving, fetching or parsing caption tracks
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The input could not be turned into a video identifier
    #[error("Invalid video identifier: {0}")]
    InvalidVideoId(String),

    /// The metadata tool could not be started
    #[error("Failed to launch metadata tool '{program}': {message}")]
    ToolLaunch {
        /// Program that was executed
        program: String,
        /// Underlying launch error
        message: String,
    },

    /// The metadata request failed
    #[error("Metadata fetch failed: {0}")]
    MetadataFetch(String),

    /// The caption payload download failed
    #[error("Caption payload fetch failed: {0}")]
    PayloadFetch(String),

    /// The upstream server answered with an error status
    #[error("Upstream responded with error: {status_code} - {message}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// A metadata document or caption payload could not be decoded
    #[error("Failed to parse {what}: {message}")]
    Parse {
        /// What was being parsed
        what: &'static str,
        /// Parser message
        message: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to set up HTTP client: {0}")]
    ClientSetup(String),

    /// An upstream operation exceeded the configured timeout
    #[error("{operation} timed out after {secs} seconds")]
    Timeout {
        /// Operation that timed out
        operation: &'static str,
        /// Timeout in seconds
        secs: u64,
    },
}

impl CaptionError {
    /// Parse failure for a metadata document
    pub fn metadata_parse(message: impl Into<String>) -> Self {
        Self::Parse { what: "metadata document", message: message.into() }
    }

    /// Parse failure for a caption payload
    pub fn payload_parse(message: impl Into<String>) -> Self {
        Self::Parse { what: "caption payload", message: message.into() }
    }
}

impl From<reqwest::Error> for CaptionError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::HttpStatus {
                status_code: status.as_u16(),
                message: error.to_string(),
            },
            None => Self::PayloadFetch(error.to_string()),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading or writing a file
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Captions could not be rendered in the requested format
    #[error("Render error: {0}")]
    Render(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Render(error.to_string())
    }
}
