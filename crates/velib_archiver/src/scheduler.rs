//! Fixed-cadence scheduling of fetch-and-write cycles.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::error::ArchiverResult;
use crate::store::SnapshotStore;
use velib_feed::VelibFeed;

/// Granularity at which the loop re-checks whether a tick is due.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock source, injectable so tick logic is testable without
/// real delays.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock reading system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Scheduler state: the configured interval and when the last tick fired.
///
/// `new` arms the timer, so the first tick is due one full interval
/// later; there is no capture at startup.
#[derive(Clone, Debug)]
pub struct Schedule {
    interval: Duration,
    last_tick: DateTime<Local>,
}

impl Schedule {
    pub fn new(interval: Duration, now: DateTime<Local>) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// True once a full interval has elapsed since the last tick.
    ///
    /// A wall clock that jumped backwards yields a negative elapsed
    /// span, which fails the conversion and reads as not due.
    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        (now - self.last_tick)
            .to_std()
            .map(|elapsed| elapsed >= self.interval)
            .unwrap_or(false)
    }

    /// Record a tick. The next one is due a full interval after `now`,
    /// uncorrelated with how long the cycle itself takes.
    pub fn mark_tick(&mut self, now: DateTime<Local>) {
        self.last_tick = now;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// One fetch-then-write cycle.
pub async fn run_cycle<F>(feed: &F, store: &SnapshotStore) -> ArchiverResult<PathBuf>
where
    F: VelibFeed + ?Sized,
{
    let snapshot = feed.fetch_csv().await?;
    let path = store.write(&snapshot).await?;
    tracing::info!(
        path = %path.display(),
        bytes = snapshot.body.len(),
        status = snapshot.status,
        "snapshot archived"
    );
    Ok(path)
}

/// Drive the schedule forever: poll once a second and run a cycle when
/// an interval has elapsed.
///
/// Cycles execute inline on this task, so no two cycles ever overlap;
/// a cycle slower than the interval delays the next check instead of
/// queueing ticks. A failed cycle is logged and the loop returns to
/// waiting, so one bad fetch or write never stops the capture.
pub async fn run<F, C>(feed: &F, store: &SnapshotStore, mut schedule: Schedule, clock: &C)
where
    F: VelibFeed + ?Sized,
    C: Clock,
{
    loop {
        tokio::time::sleep(POLL_INTERVAL).await;
        let now = clock.now();
        if !schedule.is_due(now) {
            continue;
        }
        schedule.mark_tick(now);
        if let Err(err) = run_cycle(feed, store).await {
            tracing::warn!(error = %err, "archive cycle failed; waiting for next tick");
        }
    }
}
