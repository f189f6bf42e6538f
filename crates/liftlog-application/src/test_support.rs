//! In-memory gateway used by the application-layer tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use liftlog_core::auth::{Credential, UserAccount};
use liftlog_core::error::{LiftlogError, Result};
use liftlog_core::exercise::{Exercise, MuscleGroup, NewExercise};
use liftlog_core::history::CompletedWorkout;
use liftlog_core::ids::{ExerciseId, SetId, UserId, WorkoutId};
use liftlog_core::set::{NewSet, SetRecord, SetUpdate};
use liftlog_core::workout::{Workout, WorkoutUpdate};
use liftlog_core::{GatewayOperation, WorkoutGateway};
use std::collections::HashSet;
use std::sync::Mutex;

pub(crate) fn test_credential() -> Credential {
    Credential::new(
        "test-token",
        UserAccount {
            id: UserId::from(1),
            email: "lifter@example.com".to_string(),
        },
    )
}

#[derive(Default)]
struct FakeState {
    next_id: i64,
    workouts: Vec<Workout>,
    exercises: Vec<Exercise>,
    sets: Vec<SetRecord>,
    history: Vec<CompletedWorkout>,
    failing: HashSet<GatewayOperation>,
    failing_deletes: HashSet<SetId>,
    omit_completed_at: bool,
    accept_empty_values: bool,
    calls: Vec<GatewayOperation>,
}

impl FakeState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&mut self, operation: GatewayOperation) -> Result<()> {
        self.calls.push(operation);
        if self.failing.contains(&operation) {
            return Err(LiftlogError::remote(operation, Some(500), None));
        }
        Ok(())
    }
}

/// A remote store kept in memory, with per-operation failure injection.
#[derive(Default)]
pub(crate) struct FakeGateway {
    state: Mutex<FakeState>,
}

impl FakeGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Makes every call of `operation` fail until `recover` is called.
    pub(crate) fn fail(&self, operation: GatewayOperation) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub(crate) fn recover(&self, operation: GatewayOperation) {
        self.state.lock().unwrap().failing.remove(&operation);
    }

    /// Makes deletion of one specific set fail.
    pub(crate) fn fail_delete_of(&self, set_id: &SetId) {
        self.state.lock().unwrap().failing_deletes.insert(set_id.clone());
    }

    /// Answers workout updates without a completion timestamp.
    pub(crate) fn omit_completed_at(&self) {
        self.state.lock().unwrap().omit_completed_at = true;
    }

    /// Accepts sets without reps or weight and answers with `null` for them,
    /// the way a permissive server echoes the stored row.
    pub(crate) fn accept_empty_values(&self) {
        self.state.lock().unwrap().accept_empty_values = true;
    }

    pub(crate) fn call_count(&self, operation: GatewayOperation) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|op| **op == operation)
            .count()
    }

    pub(crate) fn remote_sets(&self) -> Vec<SetRecord> {
        self.state.lock().unwrap().sets.clone()
    }

    pub(crate) fn seed_exercise(&self, name: &str, muscle_group: MuscleGroup) -> Exercise {
        let mut state = self.state.lock().unwrap();
        let exercise = Exercise {
            id: ExerciseId::from(state.next_id()),
            name: name.to_string(),
            muscle_group: Some(muscle_group),
        };
        state.exercises.push(exercise.clone());
        exercise
    }

    /// Adds catalog rows exactly as the server would send them.
    pub(crate) fn seed_catalog_json(&self, json: &str) -> Vec<Exercise> {
        let rows: Vec<Exercise> = serde_json::from_str(json).unwrap();
        self.state.lock().unwrap().exercises.extend(rows.iter().cloned());
        rows
    }

    pub(crate) fn seed_workout(&self, date: DateTime<Utc>, completed_at: Option<DateTime<Utc>>) -> Workout {
        let mut state = self.state.lock().unwrap();
        let workout = Workout {
            id: WorkoutId::from(state.next_id()),
            date,
            notes: None,
            completed_at,
        };
        state.workouts.push(workout.clone());
        workout
    }

    pub(crate) fn seed_set(&self, record: SetRecord) {
        self.state.lock().unwrap().sets.push(record);
    }

    pub(crate) fn seed_history(&self, history: Vec<CompletedWorkout>) {
        self.state.lock().unwrap().history = history;
    }
}

#[async_trait]
impl WorkoutGateway for FakeGateway {
    async fn create_workout(&self, _credential: &Credential, date: DateTime<Utc>) -> Result<Workout> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::CreateWorkout)?;
        let workout = Workout {
            id: WorkoutId::from(state.next_id()),
            date,
            notes: None,
            completed_at: None,
        };
        state.workouts.push(workout.clone());
        Ok(workout)
    }

    async fn get_workout(&self, _credential: &Credential, workout_id: &WorkoutId) -> Result<Workout> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::GetWorkout)?;
        state
            .workouts
            .iter()
            .find(|w| w.id == *workout_id)
            .cloned()
            .ok_or_else(|| LiftlogError::remote(GatewayOperation::GetWorkout, Some(404), Some("Workout not found".into())))
    }

    async fn update_workout(
        &self,
        _credential: &Credential,
        workout_id: &WorkoutId,
        update: &WorkoutUpdate,
    ) -> Result<Workout> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::UpdateWorkout)?;
        let omit_completed_at = state.omit_completed_at;
        let workout = state
            .workouts
            .iter_mut()
            .find(|w| w.id == *workout_id)
            .ok_or_else(|| LiftlogError::remote(GatewayOperation::UpdateWorkout, Some(404), None))?;
        workout.notes = update.notes.clone();
        workout.date = update.date;
        if update.completed_at.is_some() {
            workout.completed_at = update.completed_at;
        }
        let mut reply = workout.clone();
        if omit_completed_at {
            reply.completed_at = None;
        }
        Ok(reply)
    }

    async fn list_exercises(&self, _credential: &Credential) -> Result<Vec<Exercise>> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::ListExercises)?;
        Ok(state.exercises.clone())
    }

    async fn create_exercise(&self, _credential: &Credential, exercise: &NewExercise) -> Result<Exercise> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::CreateExercise)?;
        let created = Exercise {
            id: ExerciseId::from(state.next_id()),
            name: exercise.name.clone(),
            muscle_group: Some(exercise.muscle_group),
        };
        state.exercises.push(created.clone());
        Ok(created)
    }

    async fn list_sets(&self, _credential: &Credential, workout_id: &WorkoutId) -> Result<Vec<SetRecord>> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::ListSets)?;
        Ok(state
            .sets
            .iter()
            .filter(|s| s.workout_id == *workout_id)
            .cloned()
            .collect())
    }

    async fn create_set(&self, _credential: &Credential, set: &NewSet) -> Result<SetRecord> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::CreateSet)?;
        if state.accept_empty_values {
            let id = state.next_id();
            let row = serde_json::json!({
                "id": id,
                "workout_id": set.workout_id,
                "exercise_id": set.exercise_id,
                "set_number": set.set_number,
                "reps": set.reps,
                "weight": set.weight,
                "rpe": set.effort,
            });
            let record: SetRecord = serde_json::from_value(row)
                .map_err(|e| LiftlogError::remote(GatewayOperation::CreateSet, Some(200), Some(e.to_string())))?;
            state.sets.push(record.clone());
            return Ok(record);
        }
        let (Some(reps), Some(weight)) = (set.reps, set.weight) else {
            return Err(LiftlogError::remote(
                GatewayOperation::CreateSet,
                Some(400),
                Some("reps and weight are required".into()),
            ));
        };
        let record = SetRecord {
            id: SetId::from(state.next_id()),
            workout_id: set.workout_id.clone(),
            exercise_id: set.exercise_id.clone(),
            set_number: set.set_number,
            reps,
            weight,
            effort: set.effort,
        };
        state.sets.push(record.clone());
        Ok(record)
    }

    async fn update_set(&self, _credential: &Credential, set_id: &SetId, update: &SetUpdate) -> Result<SetRecord> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::UpdateSet)?;
        let record = state
            .sets
            .iter_mut()
            .find(|s| s.id == *set_id)
            .ok_or_else(|| LiftlogError::remote(GatewayOperation::UpdateSet, Some(404), None))?;
        record.exercise_id = update.exercise_id.clone();
        record.set_number = update.set_number;
        record.reps = update.reps.unwrap_or(record.reps);
        record.weight = update.weight.unwrap_or(record.weight);
        record.effort = update.effort;
        Ok(record.clone())
    }

    async fn delete_set(&self, _credential: &Credential, set_id: &SetId) -> Result<()> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::DeleteSet)?;
        if state.failing_deletes.contains(set_id) {
            return Err(LiftlogError::remote(GatewayOperation::DeleteSet, Some(500), None));
        }
        state.sets.retain(|s| s.id != *set_id);
        Ok(())
    }

    async fn workout_history(&self, _credential: &Credential) -> Result<Vec<CompletedWorkout>> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.check(GatewayOperation::WorkoutHistory)?;
        Ok(state.history.clone())
    }
}
