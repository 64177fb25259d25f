use super::status::SaveStatus;

/// Draft/baseline pair with its save status.
///
/// `is_dirty()` is always `draft != baseline`; it is never cached. While a
/// save is in flight the status stays `Saving` no matter how the draft is
/// edited, and `begin_save` refuses to start a second one.
#[derive(Debug, Clone)]
pub struct EditSession<D> {
    draft: D,
    baseline: D,
    status: SaveStatus,
}

impl<D: Clone + PartialEq> EditSession<D> {
    /// Starts a session for a freshly loaded entity.
    pub fn new(baseline: D) -> Self {
        Self {
            draft: baseline.clone(),
            baseline,
            status: SaveStatus::Idle,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn baseline(&self) -> &D {
        &self.baseline
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    pub fn is_saving(&self) -> bool {
        self.status.is_saving()
    }

    /// Mutates the draft and recomputes the status.
    ///
    /// Returns whether the draft is dirty afterwards. An edit that restores
    /// the baseline brings the session back to `Idle`.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut D),
    {
        f(&mut self.draft);
        self.after_edit()
    }

    /// Replaces the whole draft, e.g. with AI-generated content.
    pub fn replace_draft(&mut self, draft: D) -> bool {
        self.draft = draft;
        self.after_edit()
    }

    fn after_edit(&mut self) -> bool {
        let dirty = self.is_dirty();
        if !self.status.is_saving() {
            self.status = if dirty {
                SaveStatus::Dirty
            } else {
                SaveStatus::Idle
            };
        }
        dirty
    }

    /// Records that a debounce timer now covers the pending edits.
    pub fn mark_debouncing(&mut self) {
        if self.status == SaveStatus::Dirty {
            self.status = SaveStatus::Debouncing;
        }
    }

    /// Enters `Saving` and returns the snapshot to send.
    ///
    /// Returns `None` while another save is in flight. A clean draft can
    /// still be saved; the status cycles through `Saved` as usual.
    pub fn begin_save(&mut self) -> Option<D> {
        if self.status.is_saving() {
            return None;
        }
        self.status = SaveStatus::Saving;
        Some(self.draft.clone())
    }

    /// Applies a successful save.
    ///
    /// `sent` is the snapshot returned by `begin_save`, `saved` the server's
    /// response. The baseline always becomes `saved`. If the draft was not
    /// edited while the request was in flight it adopts `saved` too, so
    /// server-side normalisation shows up in the form.
    pub fn complete_save(&mut self, sent: &D, saved: D) {
        if self.draft == *sent {
            self.draft = saved.clone();
        }
        self.baseline = saved;
        self.status = if self.is_dirty() {
            SaveStatus::Dirty
        } else {
            SaveStatus::Saved
        };
    }

    /// Applies a failed save. The draft and its dirtiness are untouched.
    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.status = SaveStatus::Error {
            message: message.into(),
        };
    }

    /// Ends the `Saved` display window. Returns whether anything changed.
    pub fn settle(&mut self) -> bool {
        if self.status == SaveStatus::Saved {
            self.status = SaveStatus::Idle;
            true
        } else {
            false
        }
    }

    /// Discards the draft and starts over from a new baseline.
    pub fn reset(&mut self, baseline: D) {
        self.draft = baseline.clone();
        self.baseline = baseline;
        self.status = SaveStatus::Idle;
    }
}

#[cfg(test)]
#[path = "edit_session_test.rs"]
mod edit_session_test;
