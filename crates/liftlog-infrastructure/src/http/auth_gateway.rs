//! `AuthGateway` over the `/auth` endpoints.

use super::client::ApiClient;
use super::dto::CredentialsRequest;
use async_trait::async_trait;
use liftlog_core::GatewayOperation;
use liftlog_core::auth::{AuthGateway, Credential};
use liftlog_core::error::Result;
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<Credential> {
        let request = self
            .api
            .request(Method::POST, "auth/login", None)
            .json(&CredentialsRequest { email, password });
        self.api.send(GatewayOperation::Login, request).await
    }

    async fn register(&self, email: &str, password: &str) -> Result<Credential> {
        let request = self
            .api
            .request(Method::POST, "auth/register", None)
            .json(&CredentialsRequest { email, password });
        self.api.send(GatewayOperation::Register, request).await
    }

    async fn validate(&self, credential: &Credential) -> Result<()> {
        let request = self.api.request(Method::GET, "auth/me", Some(credential));
        let _: serde_json::Value = self.api.send(GatewayOperation::ValidateSession, request).await?;
        Ok(())
    }
}
