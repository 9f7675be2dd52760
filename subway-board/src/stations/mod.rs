//! Station directory and fuzzy station lookup.
//!
//! The directory is a flat text list of `<id> - <name>` lines, loaded once at
//! startup. Search resolves informal input like "14th st" or "w4" to
//! directory entries, for switching the board to another station.

mod directory;
mod error;
mod search;

pub use directory::{StationDirectory, parse_station_list};
pub use error::StationError;
pub use search::{MAX_SEARCH_RESULTS, normalize_ordinals, search_stations};
