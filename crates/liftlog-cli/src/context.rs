use anyhow::{Context, Result};
use liftlog_application::{AuthSession, WorkoutSessionController};
use liftlog_core::WorkoutGateway;
use liftlog_core::auth::{AuthGateway, Credential, CredentialStore};
use liftlog_core::config::ClientConfig;
use liftlog_core::ids::WorkoutId;
use liftlog_infrastructure::{ApiClient, FileCredentialStore, HttpAuthGateway, HttpWorkoutGateway, LiftlogPaths};
use std::sync::Arc;

/// Services wired for one CLI invocation.
pub struct AppContext {
    pub auth: AuthSession,
    pub gateway: Arc<dyn WorkoutGateway>,
}

impl AppContext {
    pub fn new(paths: &LiftlogPaths, config: &ClientConfig) -> Result<Self> {
        let api = ApiClient::new(config)?;
        let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(paths.credential_file()));
        let auth_gateway: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::new(api.clone()));

        Ok(Self {
            auth: AuthSession::new(auth_gateway, store),
            gateway: Arc::new(HttpWorkoutGateway::new(api)),
        })
    }

    /// The stored credential, revalidated against the server.
    pub async fn credential(&self) -> Result<Credential> {
        self.auth
            .restore()
            .await?
            .context("Not logged in. Run `liftlog login` first.")
    }

    /// Opens an existing workout as a session.
    pub async fn open_workout(&self, workout_id: &WorkoutId) -> Result<WorkoutSessionController> {
        let controller = WorkoutSessionController::new(Arc::clone(&self.gateway), self.credential().await?);
        controller
            .open(workout_id)
            .await
            .with_context(|| format!("Failed to open workout {}", workout_id))?;
        Ok(controller)
    }
}
