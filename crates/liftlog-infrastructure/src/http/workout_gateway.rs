//! `WorkoutGateway` over the workout REST API.

use super::client::ApiClient;
use super::dto::{CreateWorkoutRequest, HistoryEnvelope, WorkoutEnvelope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use liftlog_core::auth::Credential;
use liftlog_core::error::Result;
use liftlog_core::exercise::{Exercise, NewExercise};
use liftlog_core::history::CompletedWorkout;
use liftlog_core::ids::{SetId, WorkoutId};
use liftlog_core::set::{NewSet, SetRecord, SetUpdate};
use liftlog_core::workout::{Workout, WorkoutUpdate};
use liftlog_core::{GatewayOperation, WorkoutGateway};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct HttpWorkoutGateway {
    api: ApiClient,
}

impl HttpWorkoutGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WorkoutGateway for HttpWorkoutGateway {
    async fn create_workout(&self, credential: &Credential, date: DateTime<Utc>) -> Result<Workout> {
        let request = self
            .api
            .request(Method::POST, "workouts", Some(credential))
            .json(&CreateWorkoutRequest { date });
        let envelope: WorkoutEnvelope = self.api.send(GatewayOperation::CreateWorkout, request).await?;
        Ok(envelope.into_workout())
    }

    async fn get_workout(&self, credential: &Credential, workout_id: &WorkoutId) -> Result<Workout> {
        let request = self
            .api
            .request(Method::GET, &format!("workouts/{}", workout_id), Some(credential));
        let envelope: WorkoutEnvelope = self.api.send(GatewayOperation::GetWorkout, request).await?;
        Ok(envelope.into_workout())
    }

    async fn update_workout(
        &self,
        credential: &Credential,
        workout_id: &WorkoutId,
        update: &WorkoutUpdate,
    ) -> Result<Workout> {
        let request = self
            .api
            .request(Method::PUT, &format!("workouts/{}", workout_id), Some(credential))
            .json(update);
        let envelope: WorkoutEnvelope = self.api.send(GatewayOperation::UpdateWorkout, request).await?;
        Ok(envelope.into_workout())
    }

    async fn list_exercises(&self, credential: &Credential) -> Result<Vec<Exercise>> {
        let request = self.api.request(Method::GET, "exercises", Some(credential));
        self.api.send(GatewayOperation::ListExercises, request).await
    }

    async fn create_exercise(&self, credential: &Credential, exercise: &NewExercise) -> Result<Exercise> {
        let request = self
            .api
            .request(Method::POST, "exercises", Some(credential))
            .json(exercise);
        self.api.send(GatewayOperation::CreateExercise, request).await
    }

    async fn list_sets(&self, credential: &Credential, workout_id: &WorkoutId) -> Result<Vec<SetRecord>> {
        let request = self
            .api
            .request(Method::GET, &format!("{}/sets", workout_id), Some(credential));
        self.api.send(GatewayOperation::ListSets, request).await
    }

    async fn create_set(&self, credential: &Credential, set: &NewSet) -> Result<SetRecord> {
        let request = self
            .api
            .request(Method::POST, &format!("{}/sets", set.workout_id), Some(credential))
            .json(set);
        self.api.send(GatewayOperation::CreateSet, request).await
    }

    async fn update_set(&self, credential: &Credential, set_id: &SetId, update: &SetUpdate) -> Result<SetRecord> {
        let request = self
            .api
            .request(Method::PUT, &format!("sets/{}", set_id), Some(credential))
            .json(update);
        self.api.send(GatewayOperation::UpdateSet, request).await
    }

    async fn delete_set(&self, credential: &Credential, set_id: &SetId) -> Result<()> {
        let request = self
            .api
            .request(Method::DELETE, &format!("sets/{}", set_id), Some(credential));
        // The confirmation body carries nothing the client uses.
        let _: serde_json::Value = self.api.send(GatewayOperation::DeleteSet, request).await?;
        Ok(())
    }

    async fn workout_history(&self, credential: &Credential) -> Result<Vec<CompletedWorkout>> {
        let request = self.api.request(Method::GET, "workouts/history", Some(credential));
        let envelope: HistoryEnvelope = self.api.send(GatewayOperation::WorkoutHistory, request).await?;
        Ok(envelope.history)
    }
}
