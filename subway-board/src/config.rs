//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::{StationId, StationReference};
use crate::feed::FeedConfig;
use crate::poller::PollConfig;

/// Default path of the station list.
const DEFAULT_STATIONS_FILE: &str = "data/stations.txt";

/// Default listen address for the HTTP surface.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// An environment variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything `main` needs to wire up the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub poll: PollConfig,
    pub stations_file: PathBuf,
    pub listen_addr: SocketAddr,
    /// Serve feeds from `{id}.json` files in this directory instead of HTTP.
    pub mock_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from `SUBWAY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut feed = FeedConfig::default();
        if let Some(url) = lookup("SUBWAY_FEED_URL") {
            feed = feed.with_base_url(url);
        }

        let mut poll = PollConfig::default();

        if let Some(value) = lookup("SUBWAY_POLL_SECS") {
            let secs: u64 = value.trim().parse().map_err(|e| ConfigError {
                key: "SUBWAY_POLL_SECS",
                value: value.clone(),
                reason: format!("{e}"),
            })?;
            if secs == 0 {
                return Err(ConfigError {
                    key: "SUBWAY_POLL_SECS",
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
            poll = poll.with_interval(Duration::from_secs(secs));
        }

        if let Some(value) = lookup("SUBWAY_STATION_ID") {
            let id = StationId::parse(&value).map_err(|e| ConfigError {
                key: "SUBWAY_STATION_ID",
                value: value.clone(),
                reason: e.to_string(),
            })?;
            // Without an explicit name, show the id until the user picks one.
            let name = lookup("SUBWAY_STATION_NAME").unwrap_or_else(|| id.to_string());
            poll = poll.with_initial_station(StationReference::new(id, name));
        } else if let Some(name) = lookup("SUBWAY_STATION_NAME") {
            let id = poll.initial_station.id.clone();
            poll = poll.with_initial_station(StationReference::new(id, name));
        }

        if let Some(format) = lookup("SUBWAY_TIME_FORMAT") {
            poll = poll.with_time_format(format.clone()).map_err(|_| ConfigError {
                key: "SUBWAY_TIME_FORMAT",
                value: format,
                reason: "not a valid strftime format".to_string(),
            })?;
        }

        let stations_file = lookup("SUBWAY_STATIONS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIONS_FILE));

        let listen_value =
            lookup("SUBWAY_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_value.parse().map_err(|e| ConfigError {
            key: "SUBWAY_LISTEN_ADDR",
            value: listen_value.clone(),
            reason: format!("{e}"),
        })?;

        let mock_dir = lookup("SUBWAY_MOCK_DIR").map(PathBuf::from);

        Ok(Self {
            feed,
            poll,
            stations_file,
            listen_addr,
            mock_dir,
        })
    }
}
