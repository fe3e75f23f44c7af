//! One-shot background fetch cycle
//!
//! A cycle runs on its own tokio task and is delivered as a single
//! [`FetchBatch`]. It can be cancelled, and it is bounded by a deadline.
//! Cancellation and deadline expiry discard whatever was collected so far.

use super::{FetchBatch, PriceFetcher, PriceSource};
use crate::exchange::Exchange;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Slack added to the per-request budget when deriving a cycle deadline
const DEADLINE_SLACK: Duration = Duration::from_secs(1);

/// Failure of a fetch cycle as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Fetch cycle cancelled")]
    Cancelled,
    #[error("Fetch cycle exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),
    #[error("Fetch task failed: {0}")]
    Join(String),
}

/// Handle to a running fetch cycle
pub struct FetchHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    cancelled: Arc<AtomicBool>,
    join: JoinHandle<Result<FetchBatch, TaskError>>,
    deadline: Duration,
}

impl FetchHandle {
    /// Ask the cycle to stop; [`wait`](Self::wait) then yields `Cancelled`
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(tx) = self.cancel_tx.take() {
            // The task may already be done, in which case nobody listens
            let _ = tx.send(());
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the completed batch
    pub async fn wait(self) -> Result<FetchBatch, TaskError> {
        // Keep the sender alive until the task resolves so that a dropped
        // sender is never mistaken for a cancellation
        let _cancel_tx = self.cancel_tx;
        let result = match self.join.await {
            Ok(result) => result,
            Err(e) => Err(TaskError::Join(e.to_string())),
        };

        // A batch that completed before the cancel was observed is discarded
        if self.cancelled.load(Ordering::SeqCst) {
            return Err(TaskError::Cancelled);
        }
        result
    }
}

/// Deadline for a cycle over `exchanges` requests of `request_timeout` each
///
/// Saturates at `Duration::MAX` instead of overflowing.
pub fn cycle_deadline(request_timeout: Duration, exchanges: usize) -> Duration {
    let count = u32::try_from(exchanges.max(1)).unwrap_or(u32::MAX);
    request_timeout
        .checked_mul(count)
        .and_then(|d| d.checked_add(DEADLINE_SLACK))
        .unwrap_or(Duration::MAX)
}

/// Start one fetch cycle in the background
///
/// Exchanges are queried sequentially on the spawned task. If `deadline` is
/// `None` it is derived from the fetcher's request timeout.
pub fn spawn_fetch<S>(
    fetcher: Arc<PriceFetcher<S>>,
    exchanges: Vec<Exchange>,
    deadline: Option<Duration>,
) -> FetchHandle
where
    S: PriceSource + 'static,
{
    let deadline =
        deadline.unwrap_or_else(|| cycle_deadline(fetcher.request_timeout(), exchanges.len()));
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
    let cancelled = Arc::new(AtomicBool::new(false));

    tracing::debug!(
        exchanges = exchanges.len(),
        deadline_ms = deadline.as_millis() as u64,
        "Spawning fetch cycle"
    );

    let join = tokio::spawn(async move {
        tokio::select! {
            biased;

            Ok(()) = &mut cancel_rx => {
                tracing::info!("Fetch cycle cancelled");
                Err(TaskError::Cancelled)
            }
            batch = tokio::time::timeout(deadline, fetcher.fetch_all(&exchanges)) => {
                batch.map_err(|_| {
                    tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Fetch cycle deadline exceeded");
                    TaskError::DeadlineExceeded(deadline)
                })
            }
        }
    });

    FetchHandle {
        cancel_tx: Some(cancel_tx),
        cancelled,
        join,
        deadline,
    }
}
