//! Error types for the reporter core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because an unknown employee id is the
//! common failure. Every other non-2xx response lands in `HttpError` with the
//! status, URL and raw body for debugging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while fetching from the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server returned 404 for the requested resource.
    #[error("404 Client Error: Not Found for url: {url}")]
    NotFound { url: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status} for url: {url}: {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Errors raised while writing the export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
