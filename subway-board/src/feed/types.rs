//! Feed response DTOs.
//!
//! These types map directly to the feed's JSON. Every field is required;
//! direction lists are keyed `N` and `S`.

use serde::{Deserialize, Serialize};

/// A full feed response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedResponse {
    /// One entry per requested station id.
    pub data: Vec<FeedStation>,

    /// When the feed last refreshed its upstream data (ISO 8601).
    pub updated: String,
}

/// Upcoming trains at one station.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedStation {
    pub id: String,

    pub name: String,

    /// Northbound trains.
    #[serde(rename = "N")]
    pub northbound: Vec<RawTrain>,

    /// Southbound trains.
    #[serde(rename = "S")]
    pub southbound: Vec<RawTrain>,
}

/// One scheduled arrival.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawTrain {
    /// Route identifier, e.g. "F".
    pub route: String,

    /// Arrival instant (ISO 8601). Unparseable values are dropped when
    /// ranking.
    pub time: String,
}

impl RawTrain {
    pub fn new(route: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            time: time.into(),
        }
    }
}
