//! Completed-workout history model.
//!
//! History records are read-only snapshots that nest each exercise with the
//! sets logged against it.

use crate::exercise::{MuscleGroup, deserialize_muscle_group};
use crate::ids::{ExerciseId, SetId, WorkoutId};
use crate::set::{EffortRating, deserialize_reps, deserialize_weight};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub id: WorkoutId,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<HistoryExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryExercise {
    pub id: ExerciseId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_muscle_group")]
    pub muscle_group: Option<MuscleGroup>,
    #[serde(default)]
    pub sets: Vec<HistorySet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySet {
    pub id: SetId,
    pub set_number: u32,
    #[serde(default, deserialize_with = "deserialize_reps")]
    pub reps: u32,
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub weight: f64,
    #[serde(rename = "rpe")]
    pub effort: EffortRating,
}

impl CompletedWorkout {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Sum of reps × weight across every set of every exercise.
    pub fn volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(|s| f64::from(s.reps) * s.weight)
            .sum()
    }
}
