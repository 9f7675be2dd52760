//! The fetch seam used by the poller.

use std::future::Future;

use crate::domain::StationId;

use super::error::FeedError;

/// Source of raw feed bytes for a station.
///
/// Implemented by [`FeedClient`](super::FeedClient) for the live feed and by
/// [`MockFeed`](super::MockFeed) for development and tests.
pub trait FeedSource: Send + Sync + 'static {
    /// Fetch the raw response body for `station`.
    fn fetch(&self, station: &StationId) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send;
}
