//! Debounced auto-save around an [`EditSession`].
//!
//! Every edit marks the session dirty synchronously and (re)starts a
//! debounce timer; when the timer elapses the full draft is sent through a
//! [`DraftSaver`]. At most one save per controller is in flight at a time.
//!
//! ```text
//! idle ──edit──▶ dirty ──schedule──▶ debouncing ──timer──▶ saving ──ok──▶ saved ──window──▶ idle
//!                  ▲                     │ edit: restart timer   │
//!                  └──────── edit ───────┴──────── error ◀───────┘ (draft kept, still dirty)
//! ```

use async_trait::async_trait;
use shopdesk_core::config::AutoSaveSettings;
use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::ports::{Notice, Notifier, Scheduler, TimerHandle};
use shopdesk_core::session::{EditSession, SaveStatus};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

/// Persists one draft and returns what the server stored.
#[async_trait]
pub trait DraftSaver<D>: Send + Sync {
    async fn save(&self, draft: &D) -> Result<D>;
}

/// Result of an explicit save request.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The draft was persisted and is now the baseline.
    Saved,
    /// Another save was in flight; nothing was sent.
    Skipped,
    /// The request completed after the session was reset or closed; its
    /// result was dropped.
    Discarded,
    /// The save failed. The draft is kept and the status is `Error`.
    Failed(ShopdeskError),
}

struct State<D> {
    session: EditSession<D>,
    /// Bumped by `reset`/`close`; results of older saves are discarded.
    epoch: u64,
    debounce: Option<(u64, TimerHandle)>,
    settle: Option<(u64, TimerHandle)>,
    /// Sequence for timer callbacks, so a timer that fired just before it
    /// was replaced is recognised as stale.
    timer_seq: u64,
    /// The debounce timer elapsed while a save was in flight.
    follow_up: bool,
    closed: bool,
}

struct Inner<D> {
    label: String,
    state: Mutex<State<D>>,
    status_tx: watch::Sender<SaveStatus>,
    saver: Arc<dyn DraftSaver<D>>,
    scheduler: Arc<dyn Scheduler>,
    notifier: Arc<dyn Notifier>,
    settings: AutoSaveSettings,
}

/// Auto-save controller for one edited entity.
///
/// Cloning yields another handle to the same controller.
pub struct AutoSaveController<D> {
    inner: Arc<Inner<D>>,
}

impl<D> Clone for AutoSaveController<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> AutoSaveController<D>
where
    D: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(
        label: impl Into<String>,
        baseline: D,
        saver: Arc<dyn DraftSaver<D>>,
        scheduler: Arc<dyn Scheduler>,
        notifier: Arc<dyn Notifier>,
        settings: AutoSaveSettings,
    ) -> Self {
        let (status_tx, _) = watch::channel(SaveStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                label: label.into(),
                state: Mutex::new(State {
                    session: EditSession::new(baseline),
                    epoch: 0,
                    debounce: None,
                    settle: None,
                    timer_seq: 0,
                    follow_up: false,
                    closed: false,
                }),
                status_tx,
                saver,
                scheduler,
                notifier,
                settings,
            }),
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.inner.lock().session.status().clone()
    }

    /// Receives every status transition.
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.inner.status_tx.subscribe()
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.lock().session.is_dirty()
    }

    pub fn draft(&self) -> D {
        self.inner.lock().session.draft().clone()
    }

    pub fn baseline(&self) -> D {
        self.inner.lock().session.baseline().clone()
    }

    /// Applies an edit. The dirty flag is updated before this returns; the
    /// save itself happens once the debounce window passes without further
    /// edits. Returns whether the draft is dirty.
    pub fn edit<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut D),
    {
        let mut state = self.inner.lock();
        if state.closed {
            tracing::warn!("[AutoSave] {}: edit after close ignored", self.inner.label);
            return false;
        }
        state.session.edit(f);
        self.inner.after_edit(&mut state)
    }

    /// Replaces the whole draft (AI output, pasted content).
    pub fn replace_draft(&self, draft: D) -> bool {
        let mut state = self.inner.lock();
        if state.closed {
            tracing::warn!("[AutoSave] {}: edit after close ignored", self.inner.label);
            return false;
        }
        state.session.replace_draft(draft);
        self.inner.after_edit(&mut state)
    }

    /// Saves immediately, bypassing the debounce timer.
    ///
    /// Ignored with [`SaveOutcome::Skipped`] while a save is in flight.
    pub async fn save_now(&self) -> SaveOutcome {
        self.inner.run_save(true).await
    }

    /// Drops the draft and starts over from `baseline` (entity switch).
    /// A save still in flight completes, but its result is discarded.
    pub fn reset(&self, baseline: D) {
        let mut state = self.inner.lock();
        state.epoch += 1;
        self.inner.cancel_timers(&mut state);
        state.follow_up = false;
        state.session.reset(baseline);
        self.inner.publish(&state);
        tracing::debug!("[AutoSave] {}: reset", self.inner.label);
    }

    /// Tears the controller down. Pending timers are cancelled; an
    /// in-flight save is not aborted but its result is discarded. Returns
    /// whether unsaved edits were dropped.
    pub fn close(&self) -> bool {
        let mut state = self.inner.lock();
        if state.closed {
            return false;
        }
        state.closed = true;
        state.epoch += 1;
        self.inner.cancel_timers(&mut state);
        state.follow_up = false;
        let dirty = state.session.is_dirty();
        if dirty {
            tracing::warn!(
                "[AutoSave] {}: closed with unsaved changes",
                self.inner.label
            );
        }
        dirty
    }
}

impl<D> Inner<D>
where
    D: Clone + PartialEq + Send + Sync + 'static,
{
    fn lock(&self) -> MutexGuard<'_, State<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &State<D>) {
        self.status_tx.send_replace(state.session.status().clone());
    }

    fn cancel_timers(&self, state: &mut State<D>) {
        if let Some((_, handle)) = state.debounce.take() {
            self.scheduler.cancel(handle);
        }
        if let Some((_, handle)) = state.settle.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn after_edit(self: &Arc<Self>, state: &mut State<D>) -> bool {
        let dirty = state.session.is_dirty();

        if let Some((_, handle)) = state.settle.take() {
            self.scheduler.cancel(handle);
        }
        if let Some((_, handle)) = state.debounce.take() {
            self.scheduler.cancel(handle);
        }

        if dirty && self.settings.enabled {
            self.schedule_debounce(state);
            state.session.mark_debouncing();
        } else if !dirty && !state.session.is_saving() {
            state.follow_up = false;
        }

        self.publish(state);
        dirty
    }

    fn schedule_debounce(self: &Arc<Self>, state: &mut State<D>) {
        state.timer_seq += 1;
        let seq = state.timer_seq;
        let inner = Arc::clone(self);
        let handle = self.scheduler.schedule(
            self.settings.debounce(),
            Box::pin(async move { inner.on_debounce_elapsed(seq).await }),
        );
        state.debounce = Some((seq, handle));
        tracing::debug!(
            "[AutoSave] {}: save scheduled in {}ms",
            self.label,
            self.settings.debounce_ms
        );
    }

    fn schedule_settle(self: &Arc<Self>, state: &mut State<D>) {
        state.timer_seq += 1;
        let seq = state.timer_seq;
        let inner = Arc::clone(self);
        let handle = self.scheduler.schedule(
            self.settings.saved_display(),
            Box::pin(async move { inner.on_settle_elapsed(seq) }),
        );
        state.settle = Some((seq, handle));
    }

    fn schedule_follow_up(self: &Arc<Self>) {
        let inner = Arc::clone(self);
        self.scheduler.schedule(
            Duration::ZERO,
            Box::pin(async move {
                inner.run_save(false).await;
            }),
        );
    }

    async fn on_debounce_elapsed(self: Arc<Self>, seq: u64) {
        {
            let mut state = self.lock();
            if state.closed || state.debounce.map(|(s, _)| s) != Some(seq) {
                return;
            }
            state.debounce = None;

            if state.session.is_saving() {
                tracing::debug!(
                    "[AutoSave] {}: timer fired during save, queued follow-up",
                    self.label
                );
                state.follow_up = true;
                return;
            }
            if !state.session.is_dirty() {
                return;
            }
        }
        tracing::debug!("[AutoSave] {}: debounce elapsed", self.label);
        self.run_save(false).await;
    }

    fn on_settle_elapsed(&self, seq: u64) {
        let mut state = self.lock();
        if state.settle.map(|(s, _)| s) != Some(seq) {
            return;
        }
        state.settle = None;
        if state.session.settle() {
            self.publish(&state);
        }
    }

    async fn run_save(self: &Arc<Self>, manual: bool) -> SaveOutcome {
        let (sent, epoch) = {
            let mut state = self.lock();
            if state.closed {
                return SaveOutcome::Discarded;
            }
            let Some(sent) = state.session.begin_save() else {
                tracing::debug!(
                    "[AutoSave] {}: save already in flight, skipping",
                    self.label
                );
                return SaveOutcome::Skipped;
            };
            // The snapshot already carries every pending edit.
            if let Some((_, handle)) = state.debounce.take() {
                self.scheduler.cancel(handle);
            }
            if let Some((_, handle)) = state.settle.take() {
                self.scheduler.cancel(handle);
            }
            self.publish(&state);
            (sent, state.epoch)
        };

        tracing::debug!(
            "[AutoSave] {}: saving ({})",
            self.label,
            if manual { "manual" } else { "auto" }
        );
        let result = self.saver.save(&sent).await;

        let mut state = self.lock();
        if state.closed || state.epoch != epoch {
            tracing::debug!(
                "[AutoSave] {}: session replaced during save, result discarded",
                self.label
            );
            return SaveOutcome::Discarded;
        }

        match result {
            Ok(saved) => {
                state.session.complete_save(&sent, saved);
                let follow_up = std::mem::take(&mut state.follow_up);
                if state.session.status() == &SaveStatus::Saved {
                    self.schedule_settle(&mut state);
                } else if state.debounce.is_some() {
                    // The latest edit's quiet window decides when to save.
                    state.session.mark_debouncing();
                } else if follow_up {
                    self.schedule_follow_up();
                } else if self.settings.enabled {
                    // Edited back to the previous baseline while saving; no
                    // timer covers the draft yet.
                    self.schedule_debounce(&mut state);
                    state.session.mark_debouncing();
                }
                self.publish(&state);
                drop(state);

                tracing::debug!("[AutoSave] {}: saved", self.label);
                if manual {
                    self.notifier.notify(Notice::success("Changes saved"));
                }
                SaveOutcome::Saved
            }
            Err(err) => {
                let message = err.user_message();
                state.session.fail_save(message.clone());
                state.follow_up = false;
                self.publish(&state);
                drop(state);

                tracing::warn!("[AutoSave] {}: save failed: {}", self.label, message);
                self.notifier.notify(Notice::error(message));
                SaveOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;
