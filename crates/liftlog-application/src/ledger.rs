//! Set ledger for the active workout.
//!
//! The ledger owns the ordered collection of sets for one workout and keeps
//! the per-exercise numbering contiguous (1..N). Every mutation is a single
//! remote call; local state changes only after the remote store confirms, and
//! the server record is stored as returned.
//!
//! Numbering-sensitive operations (add, duplicate, delete, purge) for the same
//! exercise are serialized by a per-exercise guard that is held from the
//! moment the next number is read until the confirmed record is applied.
//! Operations on different exercises, and edits, run concurrently.

use futures::future::join_all;
use liftlog_core::WorkoutGateway;
use liftlog_core::auth::Credential;
use liftlog_core::error::{LiftlogError, Result};
use liftlog_core::ids::{ExerciseId, SetId, WorkoutId};
use liftlog_core::set::{NewSet, SetDraft, SetRecord, SetUpdate, aggregate_volume};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Outcome of deleting every set of one exercise.
#[derive(Debug, Clone)]
pub struct PurgeReport {
    pub exercise_id: ExerciseId,
    pub deleted: Vec<SetId>,
    /// Sets whose remote deletion failed; they stay in the ledger
    pub failed: Vec<(SetId, LiftlogError)>,
}

impl PurgeReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct SetLedger {
    workout_id: WorkoutId,
    gateway: Arc<dyn WorkoutGateway>,
    credential: Credential,
    sets: RwLock<Vec<SetRecord>>,
    numbering_guards: Mutex<HashMap<ExerciseId, Arc<Mutex<()>>>>,
}

impl SetLedger {
    /// Creates an empty ledger for `workout_id`.
    pub fn new(workout_id: WorkoutId, gateway: Arc<dyn WorkoutGateway>, credential: Credential) -> Self {
        Self::with_sets(workout_id, gateway, credential, Vec::new())
    }

    /// Creates a ledger from sets loaded from the remote store.
    ///
    /// Numbering is normalized per exercise the same way a delete renumbers,
    /// so a reload always shows the numbers the session showed before it.
    pub fn with_sets(
        workout_id: WorkoutId,
        gateway: Arc<dyn WorkoutGateway>,
        credential: Credential,
        mut sets: Vec<SetRecord>,
    ) -> Self {
        for exercise_id in distinct_exercises(&sets) {
            renumber(&mut sets, &exercise_id);
        }

        Self {
            workout_id,
            gateway,
            credential,
            sets: RwLock::new(sets),
            numbering_guards: Mutex::new(HashMap::new()),
        }
    }

    pub fn workout_id(&self) -> &WorkoutId {
        &self.workout_id
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Logs a new set for `exercise_id` numbered after the existing ones.
    ///
    /// On failure the ledger is unchanged and `draft` is left with the caller
    /// for a retry.
    pub async fn add_set(&self, exercise_id: &ExerciseId, draft: &SetDraft) -> Result<SetRecord> {
        let guard = self.numbering_guard(exercise_id).await;
        let _numbering = guard.lock().await;

        let set_number = self.next_set_number(exercise_id).await;
        let request = NewSet::new(self.workout_id.clone(), exercise_id.clone(), set_number, draft);

        tracing::debug!(
            "[SetLedger] Creating set {} for exercise {} in workout {}",
            set_number,
            exercise_id,
            self.workout_id
        );

        let created = self
            .gateway
            .create_set(&self.credential, &request)
            .await
            .inspect_err(|e| {
                tracing::warn!("[SetLedger] Failed to create set for exercise {}: {}", exercise_id, e);
            })?;

        self.sets.write().await.push(created.clone());
        Ok(created)
    }

    /// Logs a copy of `set_id`'s values as the next set of the same exercise.
    pub async fn duplicate_set(&self, set_id: &SetId) -> Result<SetRecord> {
        let source = self
            .get(set_id)
            .await
            .ok_or_else(|| LiftlogError::not_found("Set", set_id))?;

        self.add_set(&source.exercise_id, &SetDraft::from_record(&source))
            .await
    }

    /// Replaces a set's values. Its exercise and sequence number are kept.
    pub async fn edit_set(&self, set_id: &SetId, draft: &SetDraft) -> Result<SetRecord> {
        let existing = self
            .get(set_id)
            .await
            .ok_or_else(|| LiftlogError::not_found("Set", set_id))?;

        let update = SetUpdate::new(&existing, draft);
        let mut updated = self
            .gateway
            .update_set(&self.credential, set_id, &update)
            .await
            .inspect_err(|e| {
                tracing::warn!("[SetLedger] Failed to update set {}: {}", set_id, e);
            })?;

        let mut sets = self.sets.write().await;
        match sets.iter_mut().find(|s| s.id == *set_id) {
            Some(slot) => {
                updated.exercise_id = slot.exercise_id.clone();
                updated.set_number = slot.set_number;
                *slot = updated.clone();
            }
            None => {
                tracing::warn!("[SetLedger] Set {} left the ledger while its update was in flight", set_id);
            }
        }

        Ok(updated)
    }

    /// Deletes a set, then renumbers the remaining sets of its exercise.
    ///
    /// Renumbering is local only; siblings are not re-sent to the remote
    /// store.
    pub async fn delete_set(&self, set_id: &SetId) -> Result<()> {
        let exercise_id = self
            .get(set_id)
            .await
            .map(|s| s.exercise_id)
            .ok_or_else(|| LiftlogError::not_found("Set", set_id))?;

        let guard = self.numbering_guard(&exercise_id).await;
        let _numbering = guard.lock().await;

        tracing::debug!("[SetLedger] Deleting set {}", set_id);
        self.gateway
            .delete_set(&self.credential, set_id)
            .await
            .inspect_err(|e| {
                tracing::warn!("[SetLedger] Failed to delete set {}: {}", set_id, e);
            })?;

        let mut sets = self.sets.write().await;
        sets.retain(|s| s.id != *set_id);
        renumber(&mut sets, &exercise_id);
        Ok(())
    }

    /// Deletes every set of `exercise_id`.
    ///
    /// All deletes are issued concurrently and awaited together. Sets whose
    /// deletion succeeded are removed, the rest stay, and the survivors are
    /// renumbered once.
    pub async fn purge_exercise(&self, exercise_id: &ExerciseId) -> PurgeReport {
        let guard = self.numbering_guard(exercise_id).await;
        let _numbering = guard.lock().await;

        let targets: Vec<SetId> = self
            .sets
            .read()
            .await
            .iter()
            .filter(|s| s.exercise_id == *exercise_id)
            .map(|s| s.id.clone())
            .collect();

        tracing::debug!(
            "[SetLedger] Purging {} sets of exercise {}",
            targets.len(),
            exercise_id
        );

        let results = join_all(
            targets
                .iter()
                .map(|set_id| self.gateway.delete_set(&self.credential, set_id)),
        )
        .await;

        let mut report = PurgeReport {
            exercise_id: exercise_id.clone(),
            deleted: Vec::new(),
            failed: Vec::new(),
        };
        for (set_id, result) in targets.into_iter().zip(results) {
            match result {
                Ok(()) => report.deleted.push(set_id),
                Err(e) => {
                    tracing::warn!("[SetLedger] Failed to delete set {} during purge: {}", set_id, e);
                    report.failed.push((set_id, e));
                }
            }
        }

        let mut sets = self.sets.write().await;
        sets.retain(|s| !report.deleted.contains(&s.id));
        renumber(&mut sets, exercise_id);

        report
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// All sets in insertion order.
    pub async fn sets(&self) -> Vec<SetRecord> {
        self.sets.read().await.clone()
    }

    /// Sets of one exercise ordered by sequence number.
    pub async fn sets_for(&self, exercise_id: &ExerciseId) -> Vec<SetRecord> {
        let mut sets: Vec<SetRecord> = self
            .sets
            .read()
            .await
            .iter()
            .filter(|s| s.exercise_id == *exercise_id)
            .cloned()
            .collect();
        sets.sort_by_key(|s| s.set_number);
        sets
    }

    pub async fn get(&self, set_id: &SetId) -> Option<SetRecord> {
        self.sets.read().await.iter().find(|s| s.id == *set_id).cloned()
    }

    pub async fn count_for(&self, exercise_id: &ExerciseId) -> usize {
        self.sets
            .read()
            .await
            .iter()
            .filter(|s| s.exercise_id == *exercise_id)
            .count()
    }

    pub async fn len(&self) -> usize {
        self.sets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sets.read().await.is_empty()
    }

    /// Exercise ids in order of their first set.
    pub async fn exercise_ids(&self) -> Vec<ExerciseId> {
        distinct_exercises(&self.sets.read().await)
    }

    /// Σ reps × weight over every set currently held.
    pub async fn aggregate_volume(&self) -> f64 {
        aggregate_volume(self.sets.read().await.iter())
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    async fn numbering_guard(&self, exercise_id: &ExerciseId) -> Arc<Mutex<()>> {
        let mut guards = self.numbering_guards.lock().await;
        Arc::clone(guards.entry(exercise_id.clone()).or_default())
    }

    async fn next_set_number(&self, exercise_id: &ExerciseId) -> u32 {
        self.count_for(exercise_id).await as u32 + 1
    }
}

/// Reassigns 1..N to the sets of `exercise_id`, ordered by current number.
fn renumber(sets: &mut [SetRecord], exercise_id: &ExerciseId) {
    let mut siblings: Vec<&mut SetRecord> = sets
        .iter_mut()
        .filter(|s| s.exercise_id == *exercise_id)
        .collect();
    siblings.sort_by_key(|s| s.set_number);
    for (position, set) in siblings.into_iter().enumerate() {
        set.set_number = position as u32 + 1;
    }
}

fn distinct_exercises(sets: &[SetRecord]) -> Vec<ExerciseId> {
    let mut ids: Vec<ExerciseId> = Vec::new();
    for set in sets {
        if !ids.contains(&set.exercise_id) {
            ids.push(set.exercise_id.clone());
        }
    }
    ids
}
