//! Edit session domain module.
//!
//! An edit session pairs a draft with the last value the server confirmed
//! (the baseline) and tracks where the draft is in its save lifecycle.
//!
//! # Module Structure
//!
//! - `status`: Save lifecycle states (`SaveStatus`)
//! - `edit_session`: Draft/baseline state machine (`EditSession`)
//!
//! The session itself performs no I/O and owns no timers; the auto-save
//! controller in `shopdesk-application` drives it.

mod edit_session;
mod status;

pub use edit_session::EditSession;
pub use status::SaveStatus;
