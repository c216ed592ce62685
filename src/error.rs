//! Engine error taxonomy
//!
//! Every failure is raised synchronously to the caller. Nothing is retried and
//! nothing is swallowed: an inconsistency in the inputs is a caller-visible error.

use thiserror::Error;

/// Errors raised while processing an event
#[derive(Debug, Error)]
pub enum EngineError {
    /// Node or level configuration cannot be evaluated
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The incoming event is missing required identifiers
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Data the snapshot was expected to carry is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// A collaborator (counter, timestamp lookup, level lookup) failed
    #[error("collaborator failed: {0}")]
    Collaborator(#[source] anyhow::Error),
}

impl EngineError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        // Collaborators may hand back an engine error wrapped in anyhow
        match err.downcast::<Self>() {
            Ok(engine) => engine,
            Err(other) => Self::Collaborator(other),
        }
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;
