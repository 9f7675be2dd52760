//! Feed response decoding.

use super::error::DecodeError;
use super::types::FeedResponse;

/// How much of a bad body to keep for logging.
const BODY_SNIPPET_CHARS: usize = 500;

/// Decode a raw feed response.
///
/// Fails on malformed JSON or when any required field is missing. There is
/// no partial recovery.
pub fn decode(bytes: &[u8]) -> Result<FeedResponse, DecodeError> {
    serde_json::from_slice(bytes).map_err(|e| DecodeError {
        message: e.to_string(),
        body: Some(
            String::from_utf8_lossy(bytes)
                .chars()
                .take(BODY_SNIPPET_CHARS)
                .collect(),
        ),
    })
}
