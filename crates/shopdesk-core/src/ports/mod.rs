//! Injected services.
//!
//! Timers, notifications, the query cache and confirmation dialogs are
//! passed in as trait objects so editors and services can run against fakes.

mod cache;
mod confirm;
mod notifier;
mod scheduler;

pub use cache::QueryCache;
pub use confirm::{ConfirmationPrompt, Confirmer};
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use scheduler::{ScheduledTask, Scheduler, TimerHandle};
