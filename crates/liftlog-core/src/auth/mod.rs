//! Authentication domain module.
//!
//! The credential is an explicit value: it is acquired at login or
//! registration, handed to every gateway call, and invalidated at logout or
//! when revalidation fails. Nothing in the client keeps it in ambient state.
//!
//! - `model`: `Credential`, `UserAccount`
//! - `gateway`: `AuthGateway` trait for login/register/validate
//! - `store`: `CredentialStore` trait for persisting the credential

mod gateway;
mod model;
mod store;

pub use gateway::AuthGateway;
pub use model::{Credential, UserAccount};
pub use store::CredentialStore;
