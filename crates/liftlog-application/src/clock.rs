//! Session clock.
//!
//! An owned, suspendable timer. While running, a spawned tokio task adds one
//! tick per period to a shared counter; pausing aborts the task and freezes
//! the counter. Dropping the clock stops the task, so tearing down a session
//! view never leaks a ticker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct SessionClock {
    elapsed: Arc<AtomicU64>,
    ticker: Option<JoinHandle<()>>,
    tick: Duration,
}

impl SessionClock {
    /// A stopped clock at zero with a one-second tick.
    pub fn new() -> Self {
        Self::with_tick(DEFAULT_TICK)
    }

    /// A stopped clock at zero with a custom tick period.
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            elapsed: Arc::new(AtomicU64::new(0)),
            ticker: None,
            tick,
        }
    }

    /// Seeds the elapsed tick count, e.g. when reopening an in-progress
    /// workout.
    pub fn seeded(self, ticks: u64) -> Self {
        self.elapsed.store(ticks, Ordering::SeqCst);
        self
    }

    /// Starts ticking. No-op if already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let elapsed = Arc::clone(&self.elapsed);
        let tick = self.tick;
        self.ticker = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            loop {
                ticker.tick().await;
                elapsed.fetch_add(1, Ordering::SeqCst);
            }
        }));
        tracing::debug!("[SessionClock] started at {} ticks", self.elapsed_ticks());
    }

    /// Stops ticking. No-op if already stopped.
    pub fn pause(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            tracing::debug!("[SessionClock] paused at {} ticks", self.elapsed_ticks());
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed.load(Ordering::SeqCst)
    }

    pub fn elapsed(&self) -> Duration {
        self.tick.saturating_mul(self.elapsed_ticks().min(u64::from(u32::MAX)) as u32)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionClock {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}
