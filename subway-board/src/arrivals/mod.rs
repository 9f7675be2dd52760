//! Arrival ranking.
//!
//! Turns a decoded feed into the display-ready arrival list: per route and
//! direction, the next trains across every station in the response, soonest
//! first.

mod config;
mod rank;

pub use config::RankConfig;
pub use rank::{RankedArrivals, rank_arrivals};
