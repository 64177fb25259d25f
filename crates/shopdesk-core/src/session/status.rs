use serde::{Deserialize, Serialize};

/// Where a draft is in its save lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveStatus {
    /// No unsaved edits.
    #[default]
    Idle,
    /// Edits present, no save scheduled yet.
    Dirty,
    /// Edits present, debounce timer running.
    Debouncing,
    /// A save request is in flight.
    Saving,
    /// The last save succeeded; reverts to `Idle` after the display window.
    Saved,
    /// The last save failed. The draft is kept and still dirty.
    Error { message: String },
}

impl SaveStatus {
    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Short label for status indicators.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dirty => "unsaved changes",
            Self::Debouncing => "pending",
            Self::Saving => "saving",
            Self::Saved => "saved",
            Self::Error { .. } => "error",
        }
    }
}
