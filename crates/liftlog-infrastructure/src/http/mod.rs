//! HTTP gateways to the workout API.
//!
//! - `client`: shared reqwest client, status handling, message extraction
//! - `dto`: wire envelopes and request bodies
//! - `workout_gateway`: `WorkoutGateway` implementation
//! - `auth_gateway`: `AuthGateway` implementation

mod auth_gateway;
mod client;
mod dto;
mod workout_gateway;

pub use auth_gateway::HttpAuthGateway;
pub use client::{ApiClient, extract_message};
pub use workout_gateway::HttpWorkoutGateway;
