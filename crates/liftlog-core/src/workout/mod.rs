//! Workout domain module.
//!
//! A workout is the server-side record of one training session: its date,
//! free-text name and completion timestamp.

mod model;

pub use model::{Workout, WorkoutUpdate};
