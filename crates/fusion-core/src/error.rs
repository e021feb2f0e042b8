//! Error types for the Fusion dashboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Fusion workspace.
///
/// Every dashboard operation is total over valid input, so most variants
/// describe rejected input or misconfiguration rather than runtime failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FusionError {
    /// Input rejected before any state was touched (e.g. a blank prompt)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A participant name that is not one of the fixed identities
    #[error("Unknown participant: '{0}'")]
    UnknownParticipant(String),

    /// A workflow step was asked to move out of sequence
    #[error("Invalid transition for step '{step_id}': {reason}")]
    InvalidTransition { step_id: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl FusionError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an UnknownParticipant error
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        Self::UnknownParticipant(name.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(step_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            step_id: step_id.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FusionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FusionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FusionError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FusionError>`.
pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_and_predicates() {
        let err = FusionError::invalid_input("prompt is empty");
        assert!(err.is_invalid_input());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "Invalid input: prompt is empty");

        let err = FusionError::invalid_transition("plan", "step is not running");
        assert!(err.is_invalid_transition());
        assert_eq!(
            err.to_string(),
            "Invalid transition for step 'plan': step is not running"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: FusionError = parsed.unwrap_err().into();
        match err {
            FusionError::Serialization { format, .. } => assert_eq!(format, "TOML"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
