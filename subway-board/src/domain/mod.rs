//! Domain types for the arrival board.
//!
//! These types represent validated transit data. Station ids are checked at
//! construction time, and arrival records can only be built with a
//! non-negative ETA, so code that receives them can trust their validity.

mod arrival;
mod color;
mod direction;
mod station;
mod time;

pub use arrival::Arrival;
pub use color::RouteColor;
pub use direction::Direction;
pub use station::{InvalidStationId, StationId, StationReference};
pub use time::{TimestampError, eta_minutes, parse_feed_time};
