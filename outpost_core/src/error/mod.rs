//! Utilities for game engine error handling.

use std::error::Error as StdError;

use thiserror::Error;

/// Error returned by hooks of an [`EngineSystem`](crate::EngineSystem).
pub type SystemError = Box<dyn StdError + Send + Sync + 'static>;

/// Result of a hook of an [`EngineSystem`](crate::EngineSystem).
pub type SystemResult = std::result::Result<(), SystemError>;

/// Result of any engine operation which can return an error.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure of a single engine system during one of its lifecycle hooks.
#[derive(Debug, Error)]
pub enum SystemFault {
    #[error("failed to initialize system `{name}`: {source}")]
    Initialization { name: String, source: SystemError },

    #[error("failed to update system `{name}`: {source}")]
    Update { name: String, source: SystemError },

    #[error("failed to shut down system `{name}`: {source}")]
    Shutdown { name: String, source: SystemError },
}

impl SystemFault {
    /// Name of the system which failed.
    pub fn system_name(&self) -> &str {
        match self {
            Self::Initialization { name, .. }
            | Self::Update { name, .. }
            | Self::Shutdown { name, .. } => name,
        }
    }
}

/// Error that can happen when managing the [`GameEngine`](crate::GameEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("system `{0}` is already registered")]
    DuplicateSystem(String),

    #[error("engine is already running")]
    AlreadyRunning,

    #[error("engine initialization aborted: {0}")]
    Initialization(#[source] SystemFault),
}
