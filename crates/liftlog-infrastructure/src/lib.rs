//! Infrastructure layer for LIFTLOG.
//!
//! HTTP gateways, the TOML configuration service, the credential file store
//! and path resolution.

pub mod config_service;
pub mod credential_store;
pub mod http;
pub mod paths;

pub use config_service::ConfigService;
pub use credential_store::FileCredentialStore;
pub use http::{ApiClient, HttpAuthGateway, HttpWorkoutGateway};
pub use paths::LiftlogPaths;
