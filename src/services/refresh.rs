//! Fixed-interval refresh trigger.
//!
//! The timer only signals; whoever owns the receiver decides what a refresh
//! means. Stopping (or dropping) the timer aborts the background task, so no
//! periodic work outlives its owner.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One refresh request; `seq` counts ticks from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTick {
    pub seq: u64,
}

pub struct RefreshTimer {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    /// Start ticking. The first tick fires one full `period` after start.
    /// Must be called from within a Tokio runtime.
    pub fn start(period: Duration, tx: mpsc::Sender<RefreshTick>) -> Self {
        log::debug!("[Refresh] Timer started ({:?})", period);
        let first_tick = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut seq = 0;
            loop {
                ticker.tick().await;
                seq += 1;
                if tx.send(RefreshTick { seq }).await.is_err() {
                    log::debug!("[Refresh] Receiver gone, stopping timer");
                    break;
                }
            }
        });

        Self {
            period,
            handle: Some(handle),
        }
    }

    /// Convenience: start a timer with its own channel
    pub fn channel(period: Duration) -> (Self, mpsc::Receiver<RefreshTick>) {
        let (tx, rx) = mpsc::channel(1);
        (Self::start(period, tx), rx)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("[Refresh] Timer stopped");
        }
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
