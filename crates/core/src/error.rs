//! Error types for link title resolution.
//!
//! [`LinkTitleError`] covers the failures that are actually errors: network
//! transport problems, bad URLs and unreadable configuration. Outcomes that
//! are part of normal operation (an ineligible URL, a response that is not
//! HTML, an extractor that does not apply) are modelled as plain values
//! elsewhere and never show up here.
//!
//! # Example
//!
//! ```rust
//! use linktitle_core::{LinkTitleError, Result};
//!
//! fn require_scheme(url: &str) -> Result<&str> {
//!     if !url.starts_with("http") {
//!         return Err(LinkTitleError::InvalidUrl(url.to_string()));
//!     }
//!     Ok(url)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resolution and configuration.
#[derive(Error, Debug)]
pub enum LinkTitleError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and errors while reading the response body.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has wrong field types.
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// Result type alias for LinkTitleError.
pub type Result<T> = std::result::Result<T, LinkTitleError>;
