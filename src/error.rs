//! Error types for the metrics and state engine.
//!
//! Every variant is a caller-input problem: the engine does no I/O and
//! cannot fail internally except when an embedded seed fixture is malformed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A progress target of zero or less makes a percentage undefined.
    #[error("progress target must be positive, got {target}")]
    InvalidTarget { target: f64 },

    /// An average was requested over an empty collection.
    #[error("cannot average an empty collection")]
    EmptyCollection,

    /// A draft record failed boundary validation.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// An embedded seed fixture failed to deserialize.
    #[error("embedded seed '{file}' failed to parse: {source}")]
    Seed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this error indicates form input the user can correct.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            EngineError::Validation { .. } | EngineError::InvalidTarget { .. }
        )
    }
}
