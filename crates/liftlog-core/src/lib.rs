//! Domain layer for LIFTLOG.
//!
//! Models, identifiers, the shared error type and the traits through which
//! the session engine reaches the outside world. Nothing in this crate does
//! I/O.

pub mod auth;
pub mod config;
pub mod error;
pub mod exercise;
pub mod gateway;
pub mod history;
pub mod ids;
pub mod set;
pub mod workout;

// Re-export common error type
pub use error::{LiftlogError, Result};
pub use gateway::{GatewayOperation, WorkoutGateway};
