use futures::future::BoxFuture;
use std::time::Duration;

/// Work run once a timer elapses.
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Identifies one scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Cancellable one-shot timers.
pub trait Scheduler: Send + Sync {
    /// Runs `task` after `delay` unless cancelled first.
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TimerHandle;

    /// Cancels a pending task. Cancelling a task that already started (or an
    /// unknown handle) is a no-op; a started task always runs to completion.
    fn cancel(&self, handle: TimerHandle);
}
