//! Periodic feed polling.
//!
//! A single scheduler task owns the board state. It fetches the feed for the
//! current station on a fixed cadence, decodes and ranks the response, and
//! publishes an immutable [`BoardSnapshot`] through a watch channel. Station
//! changes arrive as commands on the same task, so the snapshot has exactly
//! one writer.

mod config;
mod error;
mod scheduler;
mod snapshot;

pub use config::PollConfig;
pub use error::{InvalidTimeFormat, RefreshError};
pub use scheduler::{PollingScheduler, SchedulerHandle};
pub use snapshot::BoardSnapshot;
