use super::model::Credential;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the credential between runs.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the stored credential.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Credential))`: a credential was stored
    /// - `Ok(None)`: nothing stored
    /// - `Err(_)`: storage could not be read
    async fn load(&self) -> Result<Option<Credential>>;

    async fn save(&self, credential: &Credential) -> Result<()>;

    /// Removes the stored credential. Succeeds if nothing was stored.
    async fn clear(&self) -> Result<()>;
}
