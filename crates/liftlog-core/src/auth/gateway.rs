use super::model::Credential;
use crate::error::Result;
use async_trait::async_trait;

/// Remote authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges email/password for a credential.
    async fn login(&self, email: &str, password: &str) -> Result<Credential>;

    /// Creates an account and returns its credential.
    async fn register(&self, email: &str, password: &str) -> Result<Credential>;

    /// Checks that the credential's token is still accepted.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: token is valid
    /// - `Err(_)`: token rejected or the check could not complete
    async fn validate(&self, credential: &Credential) -> Result<()>;
}
