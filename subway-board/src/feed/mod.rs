//! Real-time arrivals feed.
//!
//! The feed serves one JSON document per station id at
//! `<base>/by-id/<id>`, listing upcoming trains in each direction.
//!
//! Key characteristics:
//! - Several ids may be requested at once, comma-separated; each shows up as
//!   its own entry in `data`
//! - Arrival times are ISO 8601 instants with a UTC offset
//! - Responses are decoded all-or-nothing: a missing field rejects the whole
//!   document

mod client;
mod decode;
mod error;
mod mock;
mod source;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use decode::decode;
pub use error::{DecodeError, FeedError};
pub use mock::MockFeed;
pub use source::FeedSource;
pub use types::{FeedResponse, FeedStation, RawTrain};
