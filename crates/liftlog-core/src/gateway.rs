//! Remote store gateway trait.
//!
//! Defines the request/response operations the session engine consumes.
//! Implementations carry no retry logic: every call is one round trip and
//! any non-success answer becomes a `LiftlogError::Remote`.

use crate::auth::Credential;
use crate::error::Result;
use crate::exercise::{Exercise, NewExercise};
use crate::history::CompletedWorkout;
use crate::ids::{SetId, WorkoutId};
use crate::set::{NewSet, SetRecord, SetUpdate};
use crate::workout::{Workout, WorkoutUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Every remote operation, used to tag errors and pick fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    CreateWorkout,
    GetWorkout,
    UpdateWorkout,
    ListExercises,
    CreateExercise,
    ListSets,
    CreateSet,
    UpdateSet,
    DeleteSet,
    WorkoutHistory,
    Login,
    Register,
    ValidateSession,
}

impl GatewayOperation {
    /// Message used when the server rejects a request without one.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::CreateWorkout => "Failed to Create Workout",
            Self::GetWorkout => "Failed to Get Workout",
            Self::UpdateWorkout => "Failed to Update Workout",
            Self::ListExercises => "Failed to Get Exercises",
            Self::CreateExercise => "Failed to Create Exercise",
            Self::ListSets => "Failed to Get Sets",
            Self::CreateSet => "Failed to Create Set",
            Self::UpdateSet => "Failed to Update Set",
            Self::DeleteSet => "Failed to Delete Set",
            Self::WorkoutHistory => "Failed to fetch history",
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::ValidateSession => "Session validation failed",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateWorkout => "create workout",
            Self::GetWorkout => "get workout",
            Self::UpdateWorkout => "update workout",
            Self::ListExercises => "list exercises",
            Self::CreateExercise => "create exercise",
            Self::ListSets => "list sets",
            Self::CreateSet => "create set",
            Self::UpdateSet => "update set",
            Self::DeleteSet => "delete set",
            Self::WorkoutHistory => "workout history",
            Self::Login => "login",
            Self::Register => "register",
            Self::ValidateSession => "validate session",
        };
        f.write_str(name)
    }
}

/// An abstract gateway to the remote workout store.
///
/// Every call takes the caller's credential explicitly.
#[async_trait]
pub trait WorkoutGateway: Send + Sync {
    /// Creates a workout dated `date` with no name and no completion time.
    async fn create_workout(&self, credential: &Credential, date: DateTime<Utc>) -> Result<Workout>;

    async fn get_workout(&self, credential: &Credential, workout_id: &WorkoutId) -> Result<Workout>;

    /// Replaces name/date and, when present, the completion timestamp.
    async fn update_workout(
        &self,
        credential: &Credential,
        workout_id: &WorkoutId,
        update: &WorkoutUpdate,
    ) -> Result<Workout>;

    async fn list_exercises(&self, credential: &Credential) -> Result<Vec<Exercise>>;

    async fn create_exercise(&self, credential: &Credential, exercise: &NewExercise) -> Result<Exercise>;

    async fn list_sets(&self, credential: &Credential, workout_id: &WorkoutId) -> Result<Vec<SetRecord>>;

    /// Creates a set; the returned record carries the server-assigned id.
    async fn create_set(&self, credential: &Credential, set: &NewSet) -> Result<SetRecord>;

    async fn update_set(&self, credential: &Credential, set_id: &SetId, update: &SetUpdate) -> Result<SetRecord>;

    async fn delete_set(&self, credential: &Credential, set_id: &SetId) -> Result<()>;

    /// Completed workouts with their exercises and sets nested.
    async fn workout_history(&self, credential: &Credential) -> Result<Vec<CompletedWorkout>>;
}
