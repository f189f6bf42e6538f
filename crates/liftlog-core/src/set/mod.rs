//! Set domain module.
//!
//! - `effort`: the clamped 1..=10 effort rating
//! - `model`: server set records, user drafts and request bodies

mod effort;
mod model;

pub use effort::EffortRating;
pub use model::{NewSet, SetDraft, SetRecord, SetUpdate, aggregate_volume};

pub(crate) use model::{deserialize_reps, deserialize_weight};
