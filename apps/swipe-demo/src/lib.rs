//! Scripted inbox built on swipekit.
//!
//! The binary runs the session against the wall clock; tests run the same
//! script in virtual time.

mod host;
mod inbox;

pub use host::{Host, Pacing};
pub use inbox::{run_scripted_session, sample_mails, Inbox, Mail, SessionSummary};
