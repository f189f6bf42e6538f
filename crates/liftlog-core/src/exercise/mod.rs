//! Exercise catalog domain module.

mod model;

pub use model::{Exercise, MuscleGroup, NewExercise};

pub(crate) use model::deserialize_muscle_group;
