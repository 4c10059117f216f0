//! Error types for IdeaHub
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized for JSON output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote returned {status} for {url}")]
    RemoteStatus { status: u16, url: String },

    #[error("Idea not found: {0}")]
    IdeaNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_display() {
        let err = AppError::RemoteStatus {
            status: 404,
            url: "http://localhost/ideas/9".to_string(),
        };
        assert_eq!(err.to_string(), "Remote returned 404 for http://localhost/ideas/9");
    }

    #[test]
    fn test_error_serializes_as_message() {
        let err = AppError::Validation("Please fill all fields.".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Please fill all fields.\"");
    }
}
