//! The polling loop.
//!
//! Each configured stop gets its own task that fetches on a fixed
//! interval and sends converted arrivals to the board task. The board
//! task owns the [`Board`]; every update is applied, selected, and drawn
//! without yielding, so one stop's redraw never sees another stop's
//! update half-applied.
//!
//! A stop whose fetch or conversion fails logs the error and keeps its
//! previous rows. Other stops are unaffected.

use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::datamall::{BusArrivalResponse, DataMallError, arrivals_from_response};
use crate::domain::{BusStopCode, Stop};

use super::display::{Board, StopUpdate};
use super::render::{Screen, draw};

/// Time between successive polls of a stop.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Source of raw arrival responses.
///
/// This abstraction allows the loop to be tested with mock data.
pub trait ArrivalSource {
    fn fetch(
        &self,
        code: BusStopCode,
    ) -> impl Future<Output = Result<BusArrivalResponse, DataMallError>> + Send;
}

/// Runs one polling task per stop and redraws after every update.
pub struct Poller<S> {
    source: Arc<S>,
    stops: Vec<Stop>,
    interval: Duration,
    clock: fn() -> DateTime<Utc>,
}

impl<S> Poller<S>
where
    S: ArrivalSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>, stops: Vec<Stop>) -> Self {
        Self {
            source,
            stops,
            interval: POLL_INTERVAL,
            clock: Utc::now,
        }
    }

    /// Set the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the clock countdowns are measured against.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Poll and draw until `shutdown` is cancelled.
    ///
    /// Returns the board as it stood at shutdown. Fails only if drawing
    /// fails; polling tasks are stopped before returning either way.
    pub async fn run(
        self,
        mut board: Board,
        screen: &mut impl Screen,
        shutdown: CancellationToken,
    ) -> io::Result<Board> {
        let (tx, mut rx) = mpsc::channel(self.stops.len().max(1));
        let mut tasks = JoinSet::new();

        for stop in self.stops {
            tasks.spawn(poll_stop(
                Arc::clone(&self.source),
                stop,
                self.interval,
                self.clock,
                tx.clone(),
                shutdown.clone(),
            ));
        }
        drop(tx);

        let result = loop {
            tokio::select! {
                _ = shutdown.cancelled() => break Ok(()),
                update = rx.recv() => match update {
                    Some(update) => {
                        debug!(
                            stop = %update.stop_code,
                            arrivals = update.arrivals.len(),
                            "Applying stop update"
                        );
                        let rows = board.apply(update);
                        if let Err(e) = draw(screen, &rows) {
                            break Err(e);
                        }
                    }
                    None => break Ok(()),
                },
            }
        };

        shutdown.cancel();
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Stop poller ended abnormally");
            }
        }
        info!("Stopped polling");

        result.map(|()| board)
    }
}

/// Poll one stop every `period` until cancelled or the board goes away.
async fn poll_stop<S: ArrivalSource>(
    source: Arc<S>,
    stop: Stop,
    period: Duration,
    clock: fn() -> DateTime<Utc>,
    updates: mpsc::Sender<StopUpdate>,
    shutdown: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            _ = shutdown.cancelled() => return,
            fetched = source.fetch(stop.code) => fetched,
        };

        let response = match fetched {
            Ok(response) => response,
            Err(e) => {
                warn!(stop = %stop.code, error = %e, "Fetch failed, keeping previous arrivals");
                continue;
            }
        };

        let arrivals = match arrivals_from_response(&stop, &response, clock()) {
            Ok(arrivals) => arrivals,
            Err(e) => {
                warn!(stop = %stop.code, error = %e, "Malformed response, keeping previous arrivals");
                continue;
            }
        };

        let update = StopUpdate {
            stop_code: stop.code,
            arrivals,
        };
        if updates.send(update).await.is_err() {
            return;
        }
    }
}
