//! Mock feed for running without network access.
//!
//! Serves canned responses per station, either inserted directly or loaded
//! from `{id}.json` files, with an optional artificial delay.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::domain::StationId;

use super::error::FeedError;
use super::source::FeedSource;
use super::types::FeedResponse;

#[derive(Debug, Clone)]
struct MockResponse {
    body: Vec<u8>,
    delay: Duration,
}

/// Mock feed that serves canned response bodies.
#[derive(Debug, Clone, Default)]
pub struct MockFeed {
    responses: Arc<RwLock<HashMap<StationId, MockResponse>>>,
    calls: Arc<AtomicUsize>,
}

impl MockFeed {
    /// Create an empty mock. Every station is unknown until inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{id}.json` (e.g., `F21.json`). Bodies are served
    /// as-is, so a file may deliberately contain invalid JSON.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| FeedError::MockData {
            message: format!("failed to read mock data directory {data_dir:?}: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FeedError::MockData {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| StationId::parse(s).ok())
                .ok_or_else(|| FeedError::MockData {
                    message: format!("invalid station id in filename: {path:?}"),
                })?;

            let body = std::fs::read(&path).map_err(|e| FeedError::MockData {
                message: format!("failed to read {path:?}: {e}"),
            })?;

            responses.insert(
                id,
                MockResponse {
                    body,
                    delay: Duration::ZERO,
                },
            );
        }

        if responses.is_empty() {
            return Err(FeedError::MockData {
                message: format!("no mock feed files found in {data_dir:?}"),
            });
        }

        Ok(Self {
            responses: Arc::new(RwLock::new(responses)),
            calls: Arc::default(),
        })
    }

    /// Serve `body` for `station`, keeping any configured delay.
    pub async fn set_body(&self, station: &StationId, body: impl Into<Vec<u8>>) {
        let mut responses = self.responses.write().await;
        let body = body.into();
        responses
            .entry(station.clone())
            .and_modify(|r| r.body = body.clone())
            .or_insert(MockResponse {
                body,
                delay: Duration::ZERO,
            });
    }

    /// Serve the JSON encoding of `feed` for `station`.
    pub async fn set_feed(&self, station: &StationId, feed: &FeedResponse) {
        // FeedResponse only holds strings and vectors, so encoding cannot fail.
        let body = serde_json::to_vec(feed).unwrap_or_default();
        self.set_body(station, body).await;
    }

    /// Delay responses for `station`.
    pub async fn set_delay(&self, station: &StationId, delay: Duration) {
        let mut responses = self.responses.write().await;
        if let Some(response) = responses.get_mut(station) {
            response.delay = delay;
        }
    }

    /// Stop serving `station`; later fetches fail with a 404.
    pub async fn remove(&self, station: &StationId) {
        self.responses.write().await.remove(station);
    }

    /// List stations with canned responses.
    pub async fn available_stations(&self) -> Vec<StationId> {
        let responses = self.responses.read().await;
        let mut ids: Vec<_> = responses.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of fetches started so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self, station: StationId) -> Result<Vec<u8>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let response = self.responses.read().await.get(&station).cloned();
        let response = response.ok_or_else(|| FeedError::Api {
            status: 404,
            message: format!("no mock data for station {station}"),
        })?;

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        Ok(response.body)
    }
}

impl FeedSource for MockFeed {
    fn fetch(&self, station: &StationId) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send {
        self.respond(station.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn serves_inserted_body() {
        let mock = MockFeed::new();
        mock.set_body(&id("F21"), "hello").await;

        let body = mock.fetch(&id("F21")).await.unwrap();
        assert_eq!(body, b"hello");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_station_returns_error() {
        let mock = MockFeed::new();
        let result = mock.fetch(&id("XYZ")).await;
        assert!(matches!(result, Err(FeedError::Api { status: 404, .. })));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn remove_stops_serving() {
        let mock = MockFeed::new();
        mock.set_body(&id("F21"), "x").await;
        mock.remove(&id("F21")).await;
        assert!(mock.fetch(&id("F21")).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_applied() {
        let mock = MockFeed::new();
        mock.set_body(&id("F21"), "x").await;
        mock.set_delay(&id("F21"), Duration::from_secs(10)).await;

        let start = tokio::time::Instant::now();
        mock.fetch(&id("F21")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test]
    async fn load_from_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("F21.json"), r#"{"data": [], "updated": ""}"#).unwrap();
        std::fs::write(dir.path().join("A32.json"), "not json").unwrap();
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();

        let mock = MockFeed::from_dir(dir.path()).unwrap();
        assert_eq!(mock.available_stations().await, vec![id("A32"), id("F21")]);
        assert_eq!(mock.fetch(&id("A32")).await.unwrap(), b"not json");
    }

    #[tokio::test]
    async fn bundled_mock_data_ranks() {
        use crate::arrivals::{RankConfig, rank_arrivals};
        use crate::feed::decode;
        use chrono::{TimeZone, Utc};

        let mock = MockFeed::from_dir("data/mock_feeds").unwrap();
        let body = mock.fetch(&id("F21")).await.unwrap();
        let feed = decode(&body).unwrap();

        let now = Utc.with_ymd_and_hms(2030, 1, 1, 13, 0, 0).unwrap();
        let ranked = rank_arrivals(&feed, now, &RankConfig::default());
        let board: Vec<_> = ranked
            .arrivals
            .iter()
            .map(|a| (a.route.as_str(), a.display_time.as_str()))
            .collect();

        // F 08:19 northbound is the third F and falls off.
        assert_eq!(
            board,
            vec![
                ("G", "2 MIN"),
                ("F", "3 MIN"),
                ("G", "5 MIN"),
                ("F", "7 MIN"),
                ("F", "11 MIN"),
                ("G", "14 MIN"),
            ]
        );
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            MockFeed::from_dir(dir.path()),
            Err(FeedError::MockData { .. })
        ));
    }

    #[test]
    fn missing_dir_is_an_error() {
        assert!(MockFeed::from_dir("/nonexistent/mock/feeds").is_err());
    }
}
