use shopdesk_core::config::AutoSaveSettings;
use shopdesk_core::ports::{Confirmer, Notifier, QueryCache, Scheduler};
use std::sync::Arc;

/// Services shared by every auto-saving editor.
#[derive(Clone)]
pub struct EditorContext {
    pub scheduler: Arc<dyn Scheduler>,
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Arc<dyn Confirmer>,
    pub cache: Arc<dyn QueryCache>,
    pub settings: AutoSaveSettings,
}
