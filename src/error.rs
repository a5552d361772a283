/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error types for the Zencare client
//!
//! A single [`AppError`] enum covers the whole crate: transport failures,
//! non-success HTTP responses, JSON handling and token store I/O. Non-2xx
//! responses other than 401/404 keep the server's response body so callers
//! can inspect the structured error payload the backend returns.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure reported by the HTTP client
    Network(reqwest::Error),
    /// The server rejected the request with 401
    Unauthorized,
    /// The requested resource does not exist (404)
    NotFound,
    /// Any other non-success response, with the server's body preserved
    Unexpected {
        /// HTTP status code of the response
        status: StatusCode,
        /// Raw response body as received from the server
        body: String,
    },
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// I/O failure, typically from the file-backed token store
    Io(std::io::Error),
    /// A payload could not be serialized before sending
    SerializationError(String),
    /// The caller provided input the client cannot send
    InvalidInput(String),
    /// The token store could not be read or written
    StorageError(String),
}

impl AppError {
    /// Server-provided response body, when the failure carried one
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            AppError::Unexpected { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::StorageError(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
