//! Feed error types.

use std::fmt;

/// Errors from fetching the feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Mock feed data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

/// A feed response that could not be decoded.
///
/// Decoding is all-or-nothing, so this always discards the whole response.
#[derive(Debug, Clone)]
pub struct DecodeError {
    pub message: String,
    /// Leading part of the offending body, for logs.
    pub body: Option<String>,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON decode error: {}", self.message)?;
        if let Some(body) = &self.body {
            write!(f, " (body: {body})")?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}
