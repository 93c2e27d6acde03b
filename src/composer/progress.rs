//! Submission progress simulation
//!
//! Advances a progress value on a fixed interval while a submission is in
//! flight. Purely cosmetic: the value caps below 100 until the real outcome
//! arrives.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Interval between progress increments
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Increment applied on every tick
const TICK_STEP: u8 = 10;

/// Ceiling the simulation stops at; only a finished submission goes higher
pub const PROGRESS_CAP: u8 = 90;

/// Background task nudging a progress value upward
#[derive(Debug)]
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    /// Spawn the ticker against a shared progress channel
    pub fn start(progress: Arc<watch::Sender<u8>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // the first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                // never moves the value down, even against a concurrent writer
                progress.send_modify(|value| {
                    *value = (*value + TICK_STEP).min(PROGRESS_CAP).max(*value);
                });
            }
        });

        Self { handle }
    }

    /// Stop ticking; the progress value stays where it is
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
