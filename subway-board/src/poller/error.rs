//! Refresh cycle errors.

use crate::feed::{DecodeError, FeedError};

/// Why a refresh cycle was abandoned.
///
/// Either way the previously published snapshot stays in place; the next
/// tick is the retry.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// Fetching the feed failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FeedError),

    /// The feed response could not be decoded
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// A "last updated" format chrono cannot render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid strftime format: {format:?}")]
pub struct InvalidTimeFormat {
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RefreshError::from(FeedError::Api {
            status: 500,
            message: "oops".into(),
        });
        assert_eq!(err.to_string(), "fetch failed: API error 500: oops");

        let err = RefreshError::from(DecodeError {
            message: "expected value".into(),
            body: None,
        });
        assert_eq!(err.to_string(), "decode failed: JSON decode error: expected value");

        let err = InvalidTimeFormat {
            format: "%Q".into(),
        };
        assert_eq!(err.to_string(), "not a valid strftime format: \"%Q\"");
    }
}
