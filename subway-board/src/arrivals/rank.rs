//! Arrival ranking from feed data.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Arrival, Direction, eta_minutes, parse_feed_time};
use crate::feed::{FeedResponse, RawTrain};

use super::config::RankConfig;

/// Ranked arrivals and the instant they were computed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedArrivals {
    /// Sorted ascending by `eta_minutes`.
    pub arrivals: Vec<Arrival>,
    pub ranked_at: DateTime<Utc>,
}

/// Rank every train in a feed response relative to `now`.
///
/// Trains are grouped by direction and route across every station in the
/// response, and the earliest `per_route_limit` of each group are kept. Of
/// those, trains already gone (negative ETA) are dropped, so a route whose
/// next trains have all left shows nothing until the feed catches up.
/// Trains with unparseable times are skipped.
///
/// The result is sorted by ETA in minutes. The sort is stable: equal ETAs
/// keep direction, then route order.
pub fn rank_arrivals(feed: &FeedResponse, now: DateTime<Utc>, config: &RankConfig) -> RankedArrivals {
    let mut groups: BTreeMap<(Direction, &str), Vec<DateTime<Utc>>> = BTreeMap::new();

    for station in &feed.data {
        collect(&station.northbound, Direction::Northbound, &mut groups);
        collect(&station.southbound, Direction::Southbound, &mut groups);
    }

    let mut arrivals = Vec::new();
    for ((direction, route), mut times) in groups {
        times.sort();

        for at in times.into_iter().take(config.per_route_limit) {
            // Negative ETAs fail the conversion: already departed or clock skew.
            if let Ok(eta) = u32::try_from(eta_minutes(at, now)) {
                arrivals.push(Arrival::new(route, direction, eta));
            }
        }
    }

    arrivals.sort_by_key(|a| a.eta_minutes);

    RankedArrivals {
        arrivals,
        ranked_at: now,
    }
}

fn collect<'a>(
    trains: &'a [RawTrain],
    direction: Direction,
    groups: &mut BTreeMap<(Direction, &'a str), Vec<DateTime<Utc>>>,
) {
    for train in trains {
        match parse_feed_time(&train.time) {
            Ok(at) => groups.entry((direction, train.route.as_str())).or_default().push(at),
            Err(e) => debug!(route = %train.route, %direction, error = %e, "dropping train"),
        }
    }
}
