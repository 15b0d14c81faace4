//! Cancellable periodic tasks
//!
//! Every background job in the pipeline (network sampler, disk sampler,
//! collector) runs as a [`PeriodicTask`]: a ticker plus a
//! [`CancellationToken`]. Cancellation is only observed between ticks. A job
//! that has started runs to completion, so no buffer write is ever abandoned
//! half way.
//!
//! Missed ticks are skipped rather than bursted: a job slower than its period
//! delays the next tick instead of queueing work.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Shortest period a task may tick at
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A running periodic job with an explicit stop
#[derive(Debug)]
pub struct PeriodicTask {
    name: &'static str,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawn a job that first runs immediately, then every `period`
    pub fn spawn<F, Fut>(
        name: &'static str,
        period: Duration,
        token: CancellationToken,
        job: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::spawn_delayed(name, Duration::ZERO, period, token, job)
    }

    /// Spawn a job whose first run is `start_delay` from now
    ///
    /// Cancelling `token` during the delay stops the task before its first run.
    pub fn spawn_delayed<F, Fut>(
        name: &'static str,
        start_delay: Duration,
        period: Duration,
        token: CancellationToken,
        mut job: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + start_delay, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            debug!(task = name, period_ms = period.as_millis() as u64, "Periodic task started");

            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        // Runs to completion; the token is checked again only
                        // once the job has returned.
                        job().await;
                    }
                }
            }

            debug!(task = name, "Periodic task stopped");
        });

        Self {
            name,
            token,
            handle,
        }
    }

    /// Task name used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Signal the task to stop scheduling further ticks
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Whether a stop has been requested
    pub fn is_stopping(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the task and wait for any in-progress tick to finish
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            warn!(task = self.name, error = %e, "Periodic task ended abnormally");
        }
    }
}
