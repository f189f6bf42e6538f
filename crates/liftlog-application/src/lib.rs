//! Application layer for LIFTLOG.
//!
//! The active-workout session engine (clock, set ledger, exercise
//! attachments and the session controller) plus the authentication and
//! history services. Everything remote goes through the traits in
//! `liftlog-core`.

pub mod attachment;
pub mod auth_session;
pub mod clock;
pub mod controller;
pub mod history;
pub mod ledger;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use attachment::{DetachReport, ExerciseAttachments};
pub use auth_session::AuthSession;
pub use clock::SessionClock;
pub use controller::{SessionPhase, WorkoutSessionController};
pub use history::{HistoryService, WeekGroup};
pub use ledger::{PurgeReport, SetLedger};
pub use summary::{ExerciseSummary, WorkoutSummary};
