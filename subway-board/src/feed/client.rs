//! Feed HTTP client.

use std::future::Future;

use tracing::trace;

use crate::domain::StationId;

use super::error::FeedError;
use super::source::FeedSource;

/// Default base URL for the feed.
const DEFAULT_BASE_URL: &str = "https://api.wheresthefuckingtrain.com";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the arrivals feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the feed document for a station.
    pub fn station_url(&self, station: &StationId) -> String {
        format!("{}/by-id/{}", self.base_url, station.as_str())
    }

    /// Fetch the raw feed document for a station.
    pub async fn get_station(&self, station: &StationId) -> Result<Vec<u8>, FeedError> {
        let url = self.station_url(station);
        trace!(%url, "fetching feed");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl FeedSource for FeedClient {
    fn fetch(&self, station: &StationId) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send {
        self.get_station(station)
    }
}
