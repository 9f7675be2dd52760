//! Polling configuration.

use std::fmt::Write;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use tracing::warn;

use crate::domain::{StationId, StationReference};

use super::error::InvalidTimeFormat;

/// Default polling cadence.
const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Station shown until the user picks another.
const DEFAULT_STATION_ID: &str = "F21";
const DEFAULT_STATION_NAME: &str = "Carroll St";

/// Local short time, e.g. "2:05 PM".
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Configuration for the polling scheduler.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Time between periodic fetches.
    pub interval: Duration,

    /// Station polled at startup.
    pub initial_station: StationReference,

    /// `strftime` format for the "last updated" time, in local time.
    pub time_format: String,
}

impl PollConfig {
    /// Set the polling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the station polled at startup.
    pub fn with_initial_station(mut self, station: StationReference) -> Self {
        self.initial_station = station;
        self
    }

    /// Set the "last updated" time format.
    ///
    /// Formats chrono cannot render are rejected here rather than at the
    /// first refresh.
    pub fn with_time_format(
        mut self,
        format: impl Into<String>,
    ) -> Result<Self, InvalidTimeFormat> {
        let format = format.into();
        if !is_valid_time_format(&format) {
            return Err(InvalidTimeFormat { format });
        }
        self.time_format = format;
        Ok(self)
    }

    /// Render `at` with the configured format.
    ///
    /// `time_format` is a public field, so it may bypass
    /// [`with_time_format`](Self::with_time_format); an unrenderable format
    /// falls back to [`DEFAULT_TIME_FORMAT`].
    pub fn format_time(&self, at: DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.time_format)).is_ok() {
            return out;
        }
        warn!(format = %self.time_format, "cannot render time format; using default");
        at.format(DEFAULT_TIME_FORMAT).to_string()
    }
}

/// Whether `format` is a strftime string chrono can render.
fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for PollConfig {
    fn default() -> Self {
        let id = StationId::parse(DEFAULT_STATION_ID).expect("default station id is valid");
        Self {
            interval: DEFAULT_INTERVAL,
            initial_station: StationReference::new(id, DEFAULT_STATION_NAME),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}
