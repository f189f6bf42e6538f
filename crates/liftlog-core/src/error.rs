//! Error types for the Liftlog client.

use crate::gateway::GatewayOperation;
use thiserror::Error;

/// A shared error type for the entire Liftlog client.
///
/// Remote rejections and transport failures are kept as separate variants so
/// callers can log them differently, but both mean the same thing to the
/// session engine: the operation failed and local state is unchanged.
#[derive(Error, Debug, Clone)]
pub enum LiftlogError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Client-side input error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote store answered with a non-success status
    #[error("{message}")]
    Remote {
        operation: GatewayOperation,
        status: Option<u16>,
        message: String,
    },

    /// The request could not complete or its body could not be decoded
    #[error("{operation}: {message}")]
    Transport {
        operation: GatewayOperation,
        message: String,
    },

    /// A mutation was attempted outside the active phase
    #[error("Workout session is not active (phase: {phase})")]
    SessionNotActive { phase: String },

    /// No usable credential
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Multiple errors
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<LiftlogError>),
}

impl LiftlogError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Remote error. A missing or blank server message falls back to
    /// the operation's default text.
    pub fn remote(operation: GatewayOperation, status: Option<u16>, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        Self::Remote {
            operation,
            status,
            message,
        }
    }

    /// Creates a Transport error
    pub fn transport(operation: GatewayOperation, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Creates a SessionNotActive error
    pub fn session_not_active(phase: impl ToString) -> Self {
        Self::SessionNotActive {
            phase: phase.to_string(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for both remote rejections and transport failures.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Transport { .. })
    }

    /// Check if this error was raised by the session phase guard
    pub fn is_session_not_active(&self) -> bool {
        matches!(self, Self::SessionNotActive { .. })
    }

    /// The gateway operation that failed, if this is a remote failure.
    pub fn operation(&self) -> Option<GatewayOperation> {
        match self {
            Self::Remote { operation, .. } | Self::Transport { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LiftlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LiftlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LiftlogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for LiftlogError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, LiftlogError>`.
pub type Result<T> = std::result::Result<T, LiftlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_uses_server_message() {
        let err = LiftlogError::remote(
            GatewayOperation::CreateSet,
            Some(400),
            Some("reps is required".to_string()),
        );
        assert_eq!(err.to_string(), "reps is required");
        assert!(err.is_remote_failure());
        assert_eq!(err.operation(), Some(GatewayOperation::CreateSet));
    }

    #[test]
    fn test_remote_falls_back_per_operation() {
        let err = LiftlogError::remote(GatewayOperation::CreateSet, Some(500), None);
        assert_eq!(err.to_string(), "Failed to Create Set");

        let err = LiftlogError::remote(GatewayOperation::DeleteSet, None, Some("  ".into()));
        assert_eq!(err.to_string(), "Failed to Delete Set");
    }

    #[test]
    fn test_transport_counts_as_remote_failure() {
        let err = LiftlogError::transport(GatewayOperation::GetWorkout, "connection refused");
        assert!(err.is_remote_failure());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LiftlogError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }
}
