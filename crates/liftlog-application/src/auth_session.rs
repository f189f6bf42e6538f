//! Authentication lifecycle.
//!
//! Holds the credential acquired at login or registration and persists it
//! through a [`CredentialStore`]. The credential is handed out by value to
//! whoever needs to call the gateway.

use liftlog_core::auth::{AuthGateway, Credential, CredentialStore};
use liftlog_core::error::{LiftlogError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct AuthSession {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn CredentialStore>,
    current: RwLock<Option<Credential>>,
}

impl AuthSession {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            gateway,
            store,
            current: RwLock::new(None),
        }
    }

    /// Loads the stored credential and revalidates it.
    ///
    /// A credential the server no longer accepts, or one that cannot be
    /// checked, is dropped and cleared from the store.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Credential))`: a stored credential is valid and now current
    /// - `Ok(None)`: nothing stored, or the stored credential was invalidated
    /// - `Err(_)`: the store could not be read or cleared
    pub async fn restore(&self) -> Result<Option<Credential>> {
        let Some(credential) = self.store.load().await? else {
            tracing::debug!("[AuthSession] No stored credential");
            return Ok(None);
        };

        *self.current.write().await = Some(credential);
        if self.revalidate().await? {
            Ok(self.current.read().await.clone())
        } else {
            Ok(None)
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Credential> {
        tracing::debug!("[AuthSession] Logging in as {}", email);
        let credential = self.gateway.login(email, password).await.inspect_err(|e| {
            tracing::warn!("[AuthSession] Login failed: {}", e);
        })?;
        self.acquire(credential).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<Credential> {
        tracing::debug!("[AuthSession] Registering {}", email);
        let credential = self.gateway.register(email, password).await.inspect_err(|e| {
            tracing::warn!("[AuthSession] Registration failed: {}", e);
        })?;
        self.acquire(credential).await
    }

    /// Drops the credential and clears the store.
    pub async fn logout(&self) -> Result<()> {
        if let Some(credential) = self.current.write().await.take() {
            tracing::info!("[AuthSession] Logged out {}", credential.user.email);
        }
        self.store.clear().await
    }

    /// Checks the current credential against the server.
    ///
    /// Returns `Ok(false)` and invalidates the credential when the check
    /// fails for any reason. Returns `Ok(false)` when there is no credential.
    pub async fn revalidate(&self) -> Result<bool> {
        let Some(credential) = self.current.read().await.clone() else {
            return Ok(false);
        };

        match self.gateway.validate(&credential).await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!("[AuthSession] Credential for {} invalidated: {}", credential.user.email, e);
                self.logout().await?;
                Ok(false)
            }
        }
    }

    /// The current credential.
    pub async fn credential(&self) -> Result<Credential> {
        self.current
            .read()
            .await
            .clone()
            .ok_or_else(|| LiftlogError::Unauthenticated("Not logged in".to_string()))
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    async fn acquire(&self, credential: Credential) -> Result<Credential> {
        self.store.save(&credential).await?;
        *self.current.write().await = Some(credential.clone());
        tracing::info!("[AuthSession] Authenticated as {}", credential.user.email);
        Ok(credential)
    }
}
