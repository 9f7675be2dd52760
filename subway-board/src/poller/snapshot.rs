//! Published board state.

use serde::Serialize;

use crate::domain::{Arrival, StationId, StationReference};

/// Shown before the first successful refresh.
const NEVER_UPDATED: &str = "--:--";

/// An immutable view of the board, as read by display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub station_id: StationId,

    /// Upper-cased station name for the board header.
    pub station_name: String,

    /// Sorted ascending by ETA.
    pub arrivals: Vec<Arrival>,

    /// Local short time of the last successful refresh.
    pub last_updated: String,

    /// The feed's own `updated` stamp from the last successful refresh.
    pub feed_updated: Option<String>,
}

impl BoardSnapshot {
    /// Empty board for a station that has not been fetched yet.
    pub fn pending(station: &StationReference) -> Self {
        Self {
            station_id: station.id.clone(),
            station_name: station.display_name(),
            arrivals: Vec::new(),
            last_updated: NEVER_UPDATED.to_string(),
            feed_updated: None,
        }
    }

    /// Whether any refresh has succeeded for this station.
    pub fn has_updated(&self) -> bool {
        self.feed_updated.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_board() {
        let station = StationReference::new(StationId::parse("F21").unwrap(), "Carroll St");
        let board = BoardSnapshot::pending(&station);

        assert_eq!(board.station_id.as_str(), "F21");
        assert_eq!(board.station_name, "CARROLL ST");
        assert!(board.arrivals.is_empty());
        assert_eq!(board.last_updated, "--:--");
        assert!(!board.has_updated());
    }
}
