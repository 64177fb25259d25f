//! Timers on the tokio runtime.

use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::ports::{ScheduledTask, Scheduler, TimerHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Pending = Arc<Mutex<HashMap<u64, JoinHandle<()>>>>;

/// [`Scheduler`] backed by `tokio::time::sleep`.
///
/// Cancelling aborts the sleep only. Once the delay elapses the task is
/// detached onto its own tokio task, so a late `cancel` can never interrupt
/// work that already started (such as an in-flight save).
pub struct TokioScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    pending: Pending,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(1),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Scheduler on the runtime of the calling task.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| ShopdeskError::internal(format!("No tokio runtime: {}", e)))
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let pending = Arc::clone(&self.pending);
        let runtime = self.runtime.clone();

        // Hold the lock while spawning so the timer cannot fire before its
        // handle is registered.
        let mut guard = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let sleeper = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let fired = pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id)
                .is_some();
            if fired {
                runtime.spawn(task);
            }
        });
        guard.insert(id, sleeper);

        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let sleeper = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle.0);
        if let Some(sleeper) = sleeper {
            sleeper.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        let pending = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner),
        );
        for (_, sleeper) in pending {
            sleeper.abort();
        }
    }
}
