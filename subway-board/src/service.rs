//! The arrival board service.
//!
//! Owns the station directory and the polling scheduler. Constructed once in
//! `main` and shared with the web layer; there is no global instance.

use std::sync::Arc;

use tokio::sync::watch;

use crate::arrivals::RankConfig;
use crate::domain::{StationId, StationReference};
use crate::feed::FeedSource;
use crate::poller::{BoardSnapshot, PollConfig, PollingScheduler, SchedulerHandle};
use crate::stations::StationDirectory;

/// Arrival board for one station at a time, plus station lookup.
#[derive(Debug)]
pub struct ArrivalService {
    directory: StationDirectory,
    board: SchedulerHandle,
}

impl ArrivalService {
    /// Start polling `source` for the configured initial station.
    pub fn start<S: FeedSource>(
        directory: StationDirectory,
        source: S,
        poll_config: PollConfig,
        rank_config: RankConfig,
    ) -> Self {
        Self {
            directory,
            board: PollingScheduler::spawn(source, poll_config, rank_config),
        }
    }

    /// Ranked station search. Empty when the query is empty or the
    /// directory failed to load.
    pub fn search(&self, query: &str) -> Vec<&StationReference> {
        self.directory.search(query)
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&StationReference> {
        self.directory.get(id)
    }

    /// Switch the board to another station. Takes effect asynchronously.
    pub fn change_station(&self, id: StationId, name: impl Into<String>) {
        self.board.change_station(id, name);
    }

    /// The latest published board.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        self.board.snapshot()
    }

    /// Subscribe to board updates.
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardSnapshot>> {
        self.board.subscribe()
    }

    /// Stop polling and wait for the scheduler to exit.
    pub async fn stop(self) {
        self.board.stop().await;
    }
}
