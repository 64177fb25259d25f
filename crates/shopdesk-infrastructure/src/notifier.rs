//! Notice sinks.

use shopdesk_core::ports::{Notice, NoticeLevel, Notifier};
use tokio::sync::mpsc;

/// Writes notices to the log. Used when no UI is attached (CLI, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!("[Notice] {}", notice.message)
            }
            NoticeLevel::Warning => tracing::warn!("[Notice] {}", notice.message),
            NoticeLevel::Error => tracing::error!("[Notice] {}", notice.message),
        }
    }
}

/// Forwards notices to a UI consumer over an unbounded channel.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(err) = self.tx.send(notice) {
            tracing::debug!(
                "[ChannelNotifier] Receiver dropped, notice lost: {}",
                err.0.message
            );
        }
    }
}
