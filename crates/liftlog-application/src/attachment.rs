//! Exercise attachment manager.
//!
//! Tracks which exercises are shown in the current session, independent of
//! the global catalog. The catalog snapshot is kept alongside so that an
//! exercise picked by name can be resolved, or created remotely when it is
//! not known yet.

use crate::ledger::{PurgeReport, SetLedger};
use liftlog_core::WorkoutGateway;
use liftlog_core::auth::Credential;
use liftlog_core::error::{LiftlogError, Result};
use liftlog_core::exercise::{Exercise, MuscleGroup, NewExercise};
use liftlog_core::ids::{ExerciseId, SetId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Outcome of detaching an exercise.
#[derive(Debug, Clone)]
pub struct DetachReport {
    pub exercise: Exercise,
    pub purge: PurgeReport,
}

impl DetachReport {
    /// Sets that could not be deleted remotely and are now orphaned.
    pub fn orphaned(&self) -> &[(SetId, LiftlogError)] {
        &self.purge.failed
    }

    /// Folds any deletion failures into a single error.
    pub fn into_result(self) -> Result<Exercise> {
        if self.purge.failed.is_empty() {
            return Ok(self.exercise);
        }
        Err(LiftlogError::Multiple(
            self.purge.failed.into_iter().map(|(_, e)| e).collect(),
        ))
    }
}

pub struct ExerciseAttachments {
    gateway: Arc<dyn WorkoutGateway>,
    credential: Credential,
    catalog: RwLock<Vec<Exercise>>,
    attached: RwLock<Vec<Exercise>>,
}

impl ExerciseAttachments {
    pub fn new(gateway: Arc<dyn WorkoutGateway>, credential: Credential, catalog: Vec<Exercise>) -> Self {
        Self {
            gateway,
            credential,
            catalog: RwLock::new(catalog),
            attached: RwLock::new(Vec::new()),
        }
    }

    /// Attaches an exercise. Returns `false` if it was already attached.
    pub async fn attach(&self, exercise: Exercise) -> bool {
        {
            let mut catalog = self.catalog.write().await;
            if !catalog.iter().any(|e| e.id == exercise.id) {
                catalog.push(exercise.clone());
            }
        }

        let mut attached = self.attached.write().await;
        if attached.iter().any(|e| e.id == exercise.id) {
            return false;
        }
        tracing::debug!("[ExerciseAttachments] Attaching {} ({})", exercise.name, exercise.id);
        attached.push(exercise);
        true
    }

    /// Attaches the catalog exercise named `name`, creating it remotely first
    /// if the catalog has no such exercise.
    ///
    /// Names match case-insensitively after trimming.
    pub async fn select_or_create(&self, name: &str, muscle_group: MuscleGroup) -> Result<Exercise> {
        let request = NewExercise::new(name, muscle_group)?;

        let exercise = match self.find_by_name(&request.name).await {
            Some(known) => known,
            None => {
                tracing::info!(
                    "[ExerciseAttachments] Creating exercise '{}' ({})",
                    request.name,
                    request.muscle_group
                );
                self.gateway
                    .create_exercise(&self.credential, &request)
                    .await
                    .inspect_err(|e| {
                        tracing::warn!("[ExerciseAttachments] Failed to create exercise: {}", e);
                    })?
            }
        };

        self.attach(exercise.clone()).await;
        Ok(exercise)
    }

    /// Detaches an exercise after deleting every set it owns in `ledger`.
    ///
    /// Deletion is best-effort: the exercise leaves the attached list once all
    /// deletes have settled, even if some failed. The report names the sets
    /// left behind.
    pub async fn detach(&self, exercise_id: &ExerciseId, ledger: &SetLedger) -> Result<DetachReport> {
        let exercise = self
            .attached
            .read()
            .await
            .iter()
            .find(|e| e.id == *exercise_id)
            .cloned()
            .ok_or_else(|| LiftlogError::not_found("Attached exercise", exercise_id))?;

        let purge = ledger.purge_exercise(exercise_id).await;

        self.attached.write().await.retain(|e| e.id != *exercise_id);

        if purge.is_complete() {
            tracing::info!(
                "[ExerciseAttachments] Detached {} ({} sets deleted)",
                exercise.name,
                purge.deleted.len()
            );
        } else {
            tracing::warn!(
                "[ExerciseAttachments] Detached {} with {} orphaned sets",
                exercise.name,
                purge.failed.len()
            );
        }

        Ok(DetachReport { exercise, purge })
    }

    pub async fn is_attached(&self, exercise_id: &ExerciseId) -> bool {
        self.attached.read().await.iter().any(|e| e.id == *exercise_id)
    }

    /// Attached exercises in attachment order.
    pub async fn attached(&self) -> Vec<Exercise> {
        self.attached.read().await.clone()
    }

    pub async fn catalog(&self) -> Vec<Exercise> {
        self.catalog.read().await.clone()
    }

    pub async fn catalog_entry(&self, exercise_id: &ExerciseId) -> Option<Exercise> {
        self.catalog
            .read()
            .await
            .iter()
            .find(|e| e.id == *exercise_id)
            .cloned()
    }

    async fn find_by_name(&self, name: &str) -> Option<Exercise> {
        let wanted = name.trim().to_lowercase();
        self.catalog
            .read()
            .await
            .iter()
            .find(|e| e.name.trim().to_lowercase() == wanted)
            .cloned()
    }
}
