//! Wire shapes that differ from the domain models.

use chrono::{DateTime, Utc};
use liftlog_core::history::CompletedWorkout;
use liftlog_core::workout::Workout;
use serde::{Deserialize, Serialize};

/// A workout reply, either bare or wrapped as `{"workout": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WorkoutEnvelope {
    Wrapped { workout: Workout },
    Bare(Workout),
}

impl WorkoutEnvelope {
    pub(crate) fn into_workout(self) -> Workout {
        match self {
            Self::Wrapped { workout } | Self::Bare(workout) => workout,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryEnvelope {
    #[serde(default)]
    pub history: Vec<CompletedWorkout>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateWorkoutRequest {
    pub date: DateTime<Utc>,
}

#[derive(Serialize)]
pub(crate) struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
