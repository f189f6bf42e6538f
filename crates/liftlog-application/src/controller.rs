//! Workout session controller.
//!
//! The top-level state machine for one workout. It composes the clock, the
//! set ledger and the attachment manager, and is the only entry point for
//! user-visible mutations.
//!
//! ```text
//! Loading ──open/start ok──▶ Active ──end_session──▶ Completed
//!    │
//!    └──load failed──▶ Failed
//! ```
//!
//! Set and attachment mutations are accepted only while `Active`; in every
//! other phase they are rejected before any remote call is made.

use crate::attachment::{DetachReport, ExerciseAttachments};
use crate::clock::SessionClock;
use crate::ledger::SetLedger;
use crate::summary::WorkoutSummary;
use chrono::{DateTime, Utc};
use liftlog_core::WorkoutGateway;
use liftlog_core::auth::Credential;
use liftlog_core::error::{LiftlogError, Result};
use liftlog_core::exercise::{Exercise, MuscleGroup};
use liftlog_core::ids::{ExerciseId, SetId, WorkoutId};
use liftlog_core::set::{SetDraft, SetRecord};
use liftlog_core::workout::{Workout, WorkoutUpdate};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell, RwLock};

/// Lifecycle phase of a workout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial data is being fetched
    Loading,
    /// Mutations are accepted
    Active,
    /// The workout has a completion timestamp; read-only from here on
    Completed,
    /// The initial load failed; the message is for display
    Failed { message: String },
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Loading => f.write_str("loading"),
            SessionPhase::Active => f.write_str("active"),
            SessionPhase::Completed => f.write_str("completed"),
            SessionPhase::Failed { .. } => f.write_str("failed"),
        }
    }
}

struct LoadedSession {
    ledger: SetLedger,
    attachments: ExerciseAttachments,
}

pub struct WorkoutSessionController {
    gateway: Arc<dyn WorkoutGateway>,
    credential: Credential,
    phase: RwLock<SessionPhase>,
    /// Last workout record confirmed by the remote store
    workout: RwLock<Option<Workout>>,
    /// Name as currently shown, including unconfirmed edits
    display_name: RwLock<String>,
    session: OnceCell<LoadedSession>,
    clock: Mutex<SessionClock>,
    clock_tick: Duration,
}

impl WorkoutSessionController {
    /// Creates a controller in the `Loading` phase.
    pub fn new(gateway: Arc<dyn WorkoutGateway>, credential: Credential) -> Self {
        Self::with_clock_tick(gateway, credential, Duration::from_secs(1))
    }

    /// Same as [`new`](Self::new) with a custom clock tick period.
    pub fn with_clock_tick(gateway: Arc<dyn WorkoutGateway>, credential: Credential, clock_tick: Duration) -> Self {
        Self {
            gateway,
            credential,
            phase: RwLock::new(SessionPhase::Loading),
            workout: RwLock::new(None),
            display_name: RwLock::new(String::new()),
            session: OnceCell::new(),
            clock: Mutex::new(SessionClock::with_tick(clock_tick)),
            clock_tick,
        }
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Creates a new workout dated now and makes it the active session.
    pub async fn start(&self) -> Result<Workout> {
        self.ensure_loading().await?;

        tracing::info!("[WorkoutSession] Starting a new workout");
        match self.gateway.create_workout(&self.credential, Utc::now()).await {
            Ok(workout) => {
                self.activate(workout.clone(), Vec::new(), Vec::new()).await?;
                Ok(workout)
            }
            Err(e) => {
                self.fail(&e).await;
                Err(e)
            }
        }
    }

    /// Loads an existing workout with its catalog and sets.
    ///
    /// The three fetches run concurrently. A workout that already has a
    /// completion timestamp opens directly in `Completed`.
    pub async fn open(&self, workout_id: &WorkoutId) -> Result<()> {
        self.ensure_loading().await?;

        tracing::info!("[WorkoutSession] Opening workout {}", workout_id);
        let loaded = tokio::try_join!(
            self.gateway.get_workout(&self.credential, workout_id),
            self.gateway.list_exercises(&self.credential),
            self.gateway.list_sets(&self.credential, workout_id),
        );

        match loaded {
            Ok((workout, catalog, sets)) => self.activate(workout, catalog, sets).await,
            Err(e) => {
                self.fail(&e).await;
                Err(e)
            }
        }
    }

    /// Renames the workout.
    ///
    /// The displayed name changes immediately. The authoritative name only
    /// changes when the remote store confirms; on failure the display keeps
    /// the edit and the error is returned.
    pub async fn rename(&self, name: &str) -> Result<Workout> {
        self.active().await?;
        *self.display_name.write().await = name.to_string();

        let current = self.confirmed_workout().await?;
        let update = WorkoutUpdate::from_workout(&current).with_name(name);

        let updated = self
            .gateway
            .update_workout(&self.credential, &current.id, &update)
            .await
            .inspect_err(|e| {
                tracing::warn!("[WorkoutSession] Failed to rename workout {}: {}", current.id, e);
            })?;

        *self.display_name.write().await = updated.name().to_string();
        Ok(self.store_workout(updated).await)
    }

    /// Completes the workout.
    ///
    /// Sends the completion timestamp with the confirmed name and date. On
    /// success the session becomes `Completed` for good, the clock stops, and
    /// the final summary is returned. On failure the session stays `Active`.
    pub async fn end_session(&self) -> Result<WorkoutSummary> {
        self.active().await?;

        let current = self.confirmed_workout().await?;
        let completed_at = Utc::now();
        let update = WorkoutUpdate::from_workout(&current).completed_at(completed_at);

        let mut updated = self
            .gateway
            .update_workout(&self.credential, &current.id, &update)
            .await
            .inspect_err(|e| {
                tracing::warn!("[WorkoutSession] Failed to end workout {}: {}", current.id, e);
            })?;
        if updated.completed_at.is_none() {
            updated.completed_at = Some(completed_at);
        }
        self.store_workout(updated).await;

        *self.phase.write().await = SessionPhase::Completed;
        self.clock.lock().await.pause();
        tracing::info!("[WorkoutSession] Workout {} completed", current.id);

        self.summary().await
    }

    // ============================================================================
    // Set mutations
    // ============================================================================

    /// Logs a set for an attached exercise.
    pub async fn add_set(&self, exercise_id: &ExerciseId, draft: &SetDraft) -> Result<SetRecord> {
        let session = self.active().await?;
        if !session.attachments.is_attached(exercise_id).await {
            return Err(LiftlogError::not_found("Attached exercise", exercise_id));
        }
        session.ledger.add_set(exercise_id, draft).await
    }

    pub async fn duplicate_set(&self, set_id: &SetId) -> Result<SetRecord> {
        self.active().await?.ledger.duplicate_set(set_id).await
    }

    pub async fn edit_set(&self, set_id: &SetId, draft: &SetDraft) -> Result<SetRecord> {
        self.active().await?.ledger.edit_set(set_id, draft).await
    }

    pub async fn delete_set(&self, set_id: &SetId) -> Result<()> {
        self.active().await?.ledger.delete_set(set_id).await
    }

    // ============================================================================
    // Attachment mutations
    // ============================================================================

    /// Attaches a catalog exercise. Returns `false` if already attached.
    pub async fn attach_exercise(&self, exercise: Exercise) -> Result<bool> {
        Ok(self.active().await?.attachments.attach(exercise).await)
    }

    /// Attaches an exercise by name, creating it in the catalog if needed.
    pub async fn select_exercise(&self, name: &str, muscle_group: MuscleGroup) -> Result<Exercise> {
        self.active()
            .await?
            .attachments
            .select_or_create(name, muscle_group)
            .await
    }

    /// Detaches an exercise and deletes its sets (best-effort).
    pub async fn detach_exercise(&self, exercise_id: &ExerciseId) -> Result<DetachReport> {
        let session = self.active().await?;
        session.attachments.detach(exercise_id, &session.ledger).await
    }

    // ============================================================================
    // Clock
    // ============================================================================

    pub async fn start_clock(&self) {
        self.clock.lock().await.start();
    }

    pub async fn pause_clock(&self) {
        self.clock.lock().await.pause();
    }

    pub async fn is_clock_running(&self) -> bool {
        self.clock.lock().await.is_running()
    }

    pub async fn elapsed(&self) -> Duration {
        self.clock.lock().await.elapsed()
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub async fn phase(&self) -> SessionPhase {
        self.phase.read().await.clone()
    }

    /// Last workout record confirmed by the remote store.
    pub async fn workout(&self) -> Option<Workout> {
        self.workout.read().await.clone()
    }

    /// The name as currently shown, including an unconfirmed edit.
    pub async fn display_name(&self) -> String {
        self.display_name.read().await.clone()
    }

    pub async fn sets(&self) -> Vec<SetRecord> {
        match self.session.get() {
            Some(session) => session.ledger.sets().await,
            None => Vec::new(),
        }
    }

    pub async fn attached_exercises(&self) -> Vec<Exercise> {
        match self.session.get() {
            Some(session) => session.attachments.attached().await,
            None => Vec::new(),
        }
    }

    pub async fn catalog(&self) -> Vec<Exercise> {
        match self.session.get() {
            Some(session) => session.attachments.catalog().await,
            None => Vec::new(),
        }
    }

    pub async fn aggregate_volume(&self) -> f64 {
        match self.session.get() {
            Some(session) => session.ledger.aggregate_volume().await,
            None => 0.0,
        }
    }

    /// Derived, read-only view of the session.
    pub async fn summary(&self) -> Result<WorkoutSummary> {
        let session = self
            .session
            .get()
            .ok_or_else(|| LiftlogError::session_not_active(SessionPhase::Loading))?;
        let workout = self.confirmed_workout().await?;

        Ok(WorkoutSummary::build(
            workout,
            &session.attachments.attached().await,
            &session.attachments.catalog().await,
            &session.ledger.sets().await,
            self.elapsed().await,
        ))
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    async fn ensure_loading(&self) -> Result<()> {
        let phase = self.phase.read().await;
        if *phase != SessionPhase::Loading || self.session.initialized() {
            return Err(LiftlogError::internal(format!(
                "Workout session already opened (phase: {})",
                *phase
            )));
        }
        Ok(())
    }

    async fn active(&self) -> Result<&LoadedSession> {
        let phase = self.phase.read().await;
        if *phase != SessionPhase::Active {
            tracing::debug!("[WorkoutSession] Rejected mutation in phase {}", *phase);
            return Err(LiftlogError::session_not_active(&*phase));
        }
        self.session
            .get()
            .ok_or_else(|| LiftlogError::internal("Active session without loaded data"))
    }

    async fn confirmed_workout(&self) -> Result<Workout> {
        self.workout
            .read()
            .await
            .clone()
            .ok_or_else(|| LiftlogError::internal("No workout loaded"))
    }

    /// Stores a confirmed record. A completion timestamp already held is
    /// never cleared by a reply that lacks one.
    async fn store_workout(&self, mut workout: Workout) -> Workout {
        let mut slot = self.workout.write().await;
        if workout.completed_at.is_none() {
            workout.completed_at = slot.as_ref().and_then(|w| w.completed_at);
        }
        *slot = Some(workout.clone());
        workout
    }

    async fn activate(&self, workout: Workout, catalog: Vec<Exercise>, sets: Vec<SetRecord>) -> Result<()> {
        let ledger = SetLedger::with_sets(
            workout.id.clone(),
            Arc::clone(&self.gateway),
            self.credential.clone(),
            sets,
        );
        let attachments = ExerciseAttachments::new(Arc::clone(&self.gateway), self.credential.clone(), catalog);

        for exercise_id in ledger.exercise_ids().await {
            match attachments.catalog_entry(&exercise_id).await {
                Some(exercise) => {
                    attachments.attach(exercise).await;
                }
                None => {
                    tracing::warn!(
                        "[WorkoutSession] Sets reference exercise {} missing from the catalog",
                        exercise_id
                    );
                }
            }
        }

        self.session
            .set(LoadedSession { ledger, attachments })
            .map_err(|_| LiftlogError::internal("Workout session already loaded"))?;

        let completed = workout.is_completed();
        let elapsed = elapsed_ticks(
            workout.started_at(),
            workout.completed_at.unwrap_or_else(Utc::now),
            self.clock_tick,
        );
        {
            let mut clock = self.clock.lock().await;
            *clock = SessionClock::with_tick(self.clock_tick).seeded(elapsed);
            if !completed {
                clock.start();
            }
        }

        *self.display_name.write().await = workout.name().to_string();
        let workout_id = workout.id.clone();
        *self.workout.write().await = Some(workout);

        let phase = if completed {
            SessionPhase::Completed
        } else {
            SessionPhase::Active
        };
        tracing::info!("[WorkoutSession] Workout {} is {}", workout_id, phase);
        *self.phase.write().await = phase;
        Ok(())
    }

    async fn fail(&self, error: &LiftlogError) {
        tracing::warn!("[WorkoutSession] Failed to load workout: {}", error);
        *self.phase.write().await = SessionPhase::Failed {
            message: error.to_string(),
        };
    }
}

fn elapsed_ticks(from: DateTime<Utc>, to: DateTime<Utc>, tick: Duration) -> u64 {
    let millis = (to - from).num_milliseconds().max(0) as u128;
    (millis / tick.as_millis().max(1)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGateway, test_credential};
    use chrono::Duration as TimeDelta;
    use liftlog_core::GatewayOperation;
    use liftlog_core::set::EffortRating;

    fn controller(gateway: &Arc<FakeGateway>) -> WorkoutSessionController {
        WorkoutSessionController::new(Arc::clone(gateway) as Arc<dyn WorkoutGateway>, test_credential())
    }

    fn draft(reps: i64, weight: f64, effort: i64) -> SetDraft {
        SetDraft::from_input(Some(reps), Some(weight), effort)
    }

    #[tokio::test]
    async fn test_new_controller_is_loading() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);

        assert_eq!(session.phase().await, SessionPhase::Loading);
        assert!(session.sets().await.is_empty());
        let err = session.add_set(&ExerciseId::from(1), &draft(8, 135.0, 7)).await.unwrap_err();
        assert!(err.is_session_not_active());
    }

    #[tokio::test]
    async fn test_start_creates_workout_and_activates() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);

        let workout = session.start().await.unwrap();

        assert_eq!(session.phase().await, SessionPhase::Active);
        assert!(workout.completed_at.is_none());
        assert!(session.is_clock_running().await);
        assert_eq!(gateway.call_count(GatewayOperation::CreateWorkout), 1);
    }

    #[tokio::test]
    async fn test_start_twice_is_rejected() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();

        assert!(session.start().await.is_err());
        assert_eq!(gateway.call_count(GatewayOperation::CreateWorkout), 1);
    }

    #[tokio::test]
    async fn test_bench_press_scenario() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();

        let bench = session
            .select_exercise("Bench Press", MuscleGroup::Chest)
            .await
            .unwrap();
        session.add_set(&bench.id, &draft(8, 135.0, 7)).await.unwrap();
        session.add_set(&bench.id, &draft(8, 145.0, 8)).await.unwrap();

        let sets = session.sets().await;
        assert_eq!(sets.iter().map(|s| s.set_number).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(session.aggregate_volume().await, 2240.0);

        let summary = session.summary().await.unwrap();
        assert_eq!(summary.exercise_count(), 1);
        assert_eq!(summary.total_sets, 2);
        assert_eq!(summary.exercises[0].name, "Bench Press");
        assert_eq!(summary.exercises[0].volume, 2240.0);
    }

    #[tokio::test]
    async fn test_add_set_requires_attached_exercise() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();

        let err = session
            .add_set(&ExerciseId::from(77), &draft(8, 135.0, 7))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(gateway.call_count(GatewayOperation::CreateSet), 0);
    }

    #[tokio::test]
    async fn test_delete_first_set_renumbers() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        let bench = session.select_exercise("Bench Press", MuscleGroup::Chest).await.unwrap();
        let first = session.add_set(&bench.id, &draft(8, 135.0, 7)).await.unwrap();
        session.add_set(&bench.id, &draft(8, 145.0, 8)).await.unwrap();

        session.delete_set(&first.id).await.unwrap();

        let sets = session.sets().await;
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].set_number, 1);
        assert_eq!(sets[0].weight, 145.0);
    }

    #[tokio::test]
    async fn test_detach_removes_exercise_and_sets() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        let bench = session.select_exercise("Bench Press", MuscleGroup::Chest).await.unwrap();
        session.add_set(&bench.id, &draft(8, 135.0, 7)).await.unwrap();
        session.add_set(&bench.id, &draft(8, 145.0, 8)).await.unwrap();

        let report = session.detach_exercise(&bench.id).await.unwrap();

        assert!(report.orphaned().is_empty());
        assert!(session.sets().await.is_empty());
        assert!(session.attached_exercises().await.is_empty());
    }

    #[tokio::test]
    async fn test_end_session_completes_and_freezes_mutations() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        let bench = session.select_exercise("Bench Press", MuscleGroup::Chest).await.unwrap();
        let set = session.add_set(&bench.id, &draft(8, 135.0, 7)).await.unwrap();

        let summary = session.end_session().await.unwrap();

        assert_eq!(session.phase().await, SessionPhase::Completed);
        assert!(summary.workout.completed_at.is_some());
        assert!(session.workout().await.unwrap().completed_at.is_some());
        assert!(!session.is_clock_running().await);

        let creates = gateway.call_count(GatewayOperation::CreateSet);
        let rejected = [
            session.add_set(&bench.id, &draft(8, 135.0, 7)).await.map(|_| ()),
            session.duplicate_set(&set.id).await.map(|_| ()),
            session.edit_set(&set.id, &draft(1, 1.0, 1)).await.map(|_| ()),
            session.delete_set(&set.id).await,
            session.detach_exercise(&bench.id).await.map(|_| ()),
            session.select_exercise("Squat", MuscleGroup::Legs).await.map(|_| ()),
            session.end_session().await.map(|_| ()),
        ];
        for result in rejected {
            assert!(result.unwrap_err().is_session_not_active());
        }
        assert_eq!(gateway.call_count(GatewayOperation::CreateSet), creates);
        assert_eq!(gateway.call_count(GatewayOperation::UpdateSet), 0);
        assert_eq!(gateway.call_count(GatewayOperation::DeleteSet), 0);
        assert_eq!(gateway.call_count(GatewayOperation::UpdateWorkout), 1);
        assert_eq!(session.sets().await.len(), 1);
    }

    #[tokio::test]
    async fn test_end_session_keeps_completion_when_reply_omits_it() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.omit_completed_at();
        let session = controller(&gateway);
        session.start().await.unwrap();

        session.end_session().await.unwrap();

        assert!(session.workout().await.unwrap().completed_at.is_some());
    }

    #[tokio::test]
    async fn test_failed_end_session_stays_active() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        gateway.fail(GatewayOperation::UpdateWorkout);

        let err = session.end_session().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to Update Workout");
        assert_eq!(session.phase().await, SessionPhase::Active);
        assert!(session.workout().await.unwrap().completed_at.is_none());
        assert!(session.is_clock_running().await);
    }

    #[tokio::test]
    async fn test_rename_confirms_server_name() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();

        let updated = session.rename("  Push Day ").await.unwrap();

        assert_eq!(updated.notes.as_deref(), Some("Push Day"));
        assert_eq!(session.display_name().await, "Push Day");
    }

    #[tokio::test]
    async fn test_failed_rename_keeps_optimistic_display() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        session.rename("Push Day").await.unwrap();
        gateway.fail(GatewayOperation::UpdateWorkout);

        assert!(session.rename("Leg Day").await.is_err());

        assert_eq!(session.display_name().await, "Leg Day");
        assert_eq!(session.workout().await.unwrap().name(), "Push Day");
    }

    #[tokio::test]
    async fn test_end_session_sends_confirmed_name() {
        let gateway = Arc::new(FakeGateway::new());
        let session = controller(&gateway);
        session.start().await.unwrap();
        session.rename("Push Day").await.unwrap();

        let summary = session.end_session().await.unwrap();

        assert_eq!(summary.workout.name(), "Push Day");
    }

    #[tokio::test]
    async fn test_open_restores_attached_exercises_from_sets() {
        let gateway = Arc::new(FakeGateway::new());
        let bench = gateway.seed_exercise("Bench Press", MuscleGroup::Chest);
        let squat = gateway.seed_exercise("Squat", MuscleGroup::Legs);
        gateway.seed_exercise("Row", MuscleGroup::Back);
        let workout = gateway.seed_workout(Utc::now() - TimeDelta::minutes(10), None);
        for (id, exercise, number) in [(50, &squat, 1), (51, &bench, 2), (52, &bench, 1)] {
            gateway.seed_set(SetRecord {
                id: SetId::from(id),
                workout_id: workout.id.clone(),
                exercise_id: exercise.id.clone(),
                set_number: number,
                reps: 5,
                weight: 100.0,
                effort: EffortRating::clamped(7),
            });
        }
        let session = controller(&gateway);

        session.open(&workout.id).await.unwrap();

        assert_eq!(session.phase().await, SessionPhase::Active);
        assert_eq!(session.attached_exercises().await, vec![squat, bench.clone()]);
        assert_eq!(session.catalog().await.len(), 3);
        assert!(session.elapsed().await >= Duration::from_secs(600));

        let next = session.add_set(&bench.id, &draft(5, 100.0, 7)).await.unwrap();
        assert_eq!(next.set_number, 3);
    }

    #[tokio::test]
    async fn test_open_tolerates_unknown_muscle_groups() {
        let gateway = Arc::new(FakeGateway::new());
        let catalog = gateway.seed_catalog_json(
            r#"[
                {"id": 900, "name": "Bench Press", "muscle_group": "chest"},
                {"id": 901, "name": "Hip Thrust", "muscle_group": "Glutes"}
            ]"#,
        );
        let workout = gateway.seed_workout(Utc::now(), None);
        gateway.seed_set(SetRecord {
            id: SetId::from(60),
            workout_id: workout.id.clone(),
            exercise_id: catalog[1].id.clone(),
            set_number: 1,
            reps: 12,
            weight: 95.0,
            effort: EffortRating::clamped(6),
        });
        let session = controller(&gateway);

        session.open(&workout.id).await.unwrap();

        assert_eq!(session.phase().await, SessionPhase::Active);
        assert_eq!(session.catalog().await.len(), 2);
        assert_eq!(session.catalog().await[0].muscle_group, Some(MuscleGroup::Chest));
        let attached = session.attached_exercises().await;
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].name, "Hip Thrust");
        assert_eq!(attached[0].muscle_group, None);

        let summary = session.summary().await.unwrap();
        assert_eq!(summary.exercises[0].name, "Hip Thrust");
        assert_eq!(summary.exercises[0].muscle_group, None);
    }

    #[tokio::test]
    async fn test_open_completed_workout_is_read_only() {
        let gateway = Arc::new(FakeGateway::new());
        let finished = Utc::now() - TimeDelta::hours(1);
        let workout = gateway.seed_workout(finished - TimeDelta::minutes(45), Some(finished));
        let session = controller(&gateway);

        session.open(&workout.id).await.unwrap();

        assert_eq!(session.phase().await, SessionPhase::Completed);
        assert!(!session.is_clock_running().await);
        assert_eq!(session.elapsed().await, Duration::from_secs(45 * 60));
        assert!(session.rename("Too late").await.unwrap_err().is_session_not_active());
    }

    #[tokio::test]
    async fn test_failed_open_enters_failed_phase() {
        let gateway = Arc::new(FakeGateway::new());
        let workout = gateway.seed_workout(Utc::now(), None);
        gateway.fail(GatewayOperation::ListSets);
        let session = controller(&gateway);

        let err = session.open(&workout.id).await.unwrap_err();

        assert!(err.is_remote_failure());
        assert_eq!(
            session.phase().await,
            SessionPhase::Failed {
                message: "Failed to Get Sets".to_string()
            }
        );
        assert!(session.add_set(&ExerciseId::from(1), &draft(1, 1.0, 1)).await.is_err());
        // No automatic retry.
        assert_eq!(gateway.call_count(GatewayOperation::ListSets), 1);
        assert!(session.open(&workout.id).await.is_err());
    }
}
