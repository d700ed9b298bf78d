//! Error types for Gravatar URL construction.

use thiserror::Error;

/// Errors that can occur while hashing an identifier or composing a URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GravurlError {
    /// The identifier hasher failed. Builders return this unchanged.
    #[error("Hashing failed: {0}")]
    HashingError(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// A configured base URL uses a scheme other than https or http.
    #[error("Invalid scheme: only https and http base URLs are supported")]
    InvalidScheme,

    /// A configured base URL carries a query string or fragment.
    #[error("Invalid base URL: query strings and fragments are not allowed")]
    InvalidBaseUrl,
}

impl From<url::ParseError> for GravurlError {
    fn from(err: url::ParseError) -> Self {
        GravurlError::UrlParseError(err.to_string())
    }
}
