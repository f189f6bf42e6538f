//! Read-only workout summary derived from session state.

use liftlog_core::exercise::{Exercise, MuscleGroup};
use liftlog_core::ids::ExerciseId;
use liftlog_core::set::{SetRecord, aggregate_volume};
use liftlog_core::workout::Workout;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSummary {
    pub exercise_id: ExerciseId,
    pub name: String,
    /// `None` when the exercise is missing from the catalog snapshot
    pub muscle_group: Option<MuscleGroup>,
    /// Ordered by sequence number
    pub sets: Vec<SetRecord>,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub workout: Workout,
    pub exercises: Vec<ExerciseSummary>,
    pub total_sets: usize,
    pub aggregate_volume: f64,
    pub elapsed: Duration,
}

impl WorkoutSummary {
    /// Builds the summary. Attached exercises come first in attachment
    /// order, followed by any exercise that still owns sets without being
    /// attached (sets orphaned by a partially failed detach).
    pub fn build(
        workout: Workout,
        attached: &[Exercise],
        catalog: &[Exercise],
        sets: &[SetRecord],
        elapsed: Duration,
    ) -> Self {
        let mut order: Vec<ExerciseId> = attached.iter().map(|e| e.id.clone()).collect();
        for set in sets {
            if !order.contains(&set.exercise_id) {
                order.push(set.exercise_id.clone());
            }
        }

        let exercises = order
            .into_iter()
            .map(|exercise_id| {
                let known = attached
                    .iter()
                    .chain(catalog.iter())
                    .find(|e| e.id == exercise_id);
                let mut owned: Vec<SetRecord> = sets
                    .iter()
                    .filter(|s| s.exercise_id == exercise_id)
                    .cloned()
                    .collect();
                owned.sort_by_key(|s| s.set_number);

                ExerciseSummary {
                    name: known
                        .map(|e| e.name.clone())
                        .unwrap_or_else(|| format!("Exercise {}", exercise_id)),
                    muscle_group: known.and_then(|e| e.muscle_group),
                    volume: aggregate_volume(owned.iter()),
                    sets: owned,
                    exercise_id,
                }
            })
            .collect();

        Self {
            workout,
            exercises,
            total_sets: sets.len(),
            aggregate_volume: aggregate_volume(sets.iter()),
            elapsed,
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}
