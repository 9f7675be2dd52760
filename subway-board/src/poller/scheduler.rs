//! The polling scheduler task and its handle.

use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace, warn};

use crate::arrivals::{RankConfig, rank_arrivals};
use crate::domain::{StationId, StationReference};
use crate::feed::{FeedResponse, FeedSource, decode};

use super::config::PollConfig;
use super::error::RefreshError;
use super::snapshot::BoardSnapshot;

/// Requests sent to the scheduler task.
#[derive(Debug)]
enum Command {
    ChangeStation(StationReference),
}

/// A finished fetch, tagged with the station it was issued for.
struct FetchOutcome {
    target: StationId,
    result: Result<FeedResponse, RefreshError>,
}

/// Drives periodic fetch, decode, rank and publish cycles.
///
/// Fetch cycles are serialized: a tick that fires while a fetch for the
/// current station is still running is skipped. A station change supersedes
/// any running fetch, and results are only published if they were issued for
/// the station that is current when they complete.
pub struct PollingScheduler<S> {
    source: Arc<S>,
    config: PollConfig,
    rank_config: RankConfig,
    target: StationReference,
    state: watch::Sender<Arc<BoardSnapshot>>,
    in_flight: JoinSet<FetchOutcome>,
}

impl<S: FeedSource> PollingScheduler<S> {
    /// Start polling on the current tokio runtime.
    ///
    /// The first fetch is issued immediately. Polling continues until
    /// [`SchedulerHandle::shutdown`] is called or the handle is dropped.
    pub fn spawn(source: S, config: PollConfig, rank_config: RankConfig) -> SchedulerHandle {
        let target = config.initial_station.clone();
        let (state, state_rx) = watch::channel(Arc::new(BoardSnapshot::pending(&target)));
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (shutdown, shutdown_rx) = oneshot::channel();

        let scheduler = Self {
            source: Arc::new(source),
            config,
            rank_config,
            target,
            state,
            in_flight: JoinSet::new(),
        };

        let task = tokio::spawn(scheduler.run(command_rx, shutdown_rx));

        SchedulerHandle {
            commands,
            state: state_rx,
            shutdown: Some(shutdown),
            task,
        }
    }

    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => self.on_tick(),
                command = commands.recv() => match command {
                    Some(Command::ChangeStation(station)) => self.change_station(station),
                    None => break,
                },
                Some(joined) = self.in_flight.join_next() => self.on_fetch_complete(joined),
            }
        }

        self.in_flight.abort_all();
        info!("polling stopped");
    }

    fn on_tick(&mut self) {
        if !self.in_flight.is_empty() {
            debug!(station = %self.target.id, "fetch still in flight; skipping tick");
            return;
        }
        self.start_fetch();
    }

    fn change_station(&mut self, station: StationReference) {
        info!(station = %station.id, name = %station.name, "changing station");

        // Dropping the old set aborts whatever was still running for the
        // previous station.
        self.in_flight = JoinSet::new();
        self.target = station;
        self.state
            .send_replace(Arc::new(BoardSnapshot::pending(&self.target)));

        self.start_fetch();
    }

    fn start_fetch(&mut self) {
        let source = Arc::clone(&self.source);
        let target = self.target.id.clone();
        trace!(station = %target, "starting fetch");

        self.in_flight.spawn(async move {
            let result = match source.fetch(&target).await {
                Ok(body) => decode(&body).map_err(RefreshError::from),
                Err(e) => Err(RefreshError::from(e)),
            };
            FetchOutcome { target, result }
        });
    }

    fn on_fetch_complete(&mut self, joined: Result<FetchOutcome, JoinError>) {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => return,
            Err(e) => {
                warn!(error = %e, "fetch task failed");
                return;
            }
        };

        if outcome.target != self.target.id {
            debug!(
                issued_for = %outcome.target,
                current = %self.target.id,
                "discarding result for previous station"
            );
            return;
        }

        match outcome.result {
            Ok(feed) => self.publish(&feed),
            Err(e) => warn!(station = %outcome.target, error = %e, "refresh failed; keeping previous arrivals"),
        }
    }

    fn publish(&self, feed: &FeedResponse) {
        let now = Utc::now();
        let ranked = rank_arrivals(feed, now, &self.rank_config);
        let last_updated = self.config.format_time(now.with_timezone(&Local));

        info!(
            station = %self.target.id,
            arrivals = ranked.arrivals.len(),
            %last_updated,
            "published arrivals"
        );

        self.state.send_replace(Arc::new(BoardSnapshot {
            station_id: self.target.id.clone(),
            station_name: self.target.display_name(),
            arrivals: ranked.arrivals,
            last_updated,
            feed_updated: Some(feed.updated.clone()),
        }));
    }
}

/// Handle to a running [`PollingScheduler`].
///
/// Dropping the handle stops polling.
#[derive(Debug)]
pub struct SchedulerHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<Arc<BoardSnapshot>>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Switch the board to another station.
    ///
    /// The new name is published straight away with an empty arrival list,
    /// and one fetch is issued immediately. The periodic cadence is not
    /// reset.
    pub fn change_station(&self, id: StationId, name: impl Into<String>) {
        let station = StationReference::new(id, name);
        if self.commands.send(Command::ChangeStation(station)).is_err() {
            warn!("polling has stopped; ignoring station change");
        }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.state.borrow())
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardSnapshot>> {
        self.state.clone()
    }

    /// Ask the scheduler to stop. Running fetches are aborted.
    pub fn shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }

    /// Whether the scheduler task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the scheduler and wait for it to exit.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "scheduler task ended abnormally");
        }
    }
}
