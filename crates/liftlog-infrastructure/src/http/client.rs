//! Shared reqwest plumbing for the HTTP gateways.

use liftlog_core::GatewayOperation;
use liftlog_core::auth::Credential;
use liftlog_core::config::ClientConfig;
use liftlog_core::error::{LiftlogError, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A reqwest client bound to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| LiftlogError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request, bearer-authenticated when a credential is given.
    pub(crate) fn request(&self, method: Method, path: &str, credential: Option<&Credential>) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match credential {
            Some(credential) => request.bearer_auth(&credential.token),
            None => request,
        }
    }

    /// Sends the request and decodes a success body as `T`.
    ///
    /// A non-2xx status becomes `LiftlogError::Remote` carrying the body's
    /// `message` (or the operation's fallback). A failed send or an
    /// undecodable success body becomes `LiftlogError::Transport`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        operation: GatewayOperation,
        request: RequestBuilder,
    ) -> Result<T> {
        tracing::debug!("[ApiClient] {}", operation);

        let response = request
            .send()
            .await
            .map_err(|e| LiftlogError::transport(operation, e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LiftlogError::transport(operation, e.to_string()))?;

        if !status.is_success() {
            let error = LiftlogError::remote(operation, Some(status.as_u16()), extract_message(&body));
            tracing::warn!("[ApiClient] {} failed ({}): {}", operation, status, error);
            return Err(error);
        }

        decode_body(operation, &body)
    }
}

/// The non-empty `message` field of a JSON error body, if any.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Decodes a success body. An empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(operation: GatewayOperation, body: &str) -> Result<T> {
    let decoded = if body.trim().is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_str(body)
    };
    decoded.map_err(|e| LiftlogError::transport(operation, format!("Invalid response body: {}", e)))
}
