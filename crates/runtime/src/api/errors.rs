//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the combat session, repositories, and action providers
//! so clients can bubble them up with consistent context.
use combat_core::{CombatError, ErrorSeverity, OracleError, SessionError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("pilot '{0}' not found in the player store")]
    PilotNotFound(String),

    #[error("action provider not set")]
    ProviderNotSet,

    #[error("action provider channel closed")]
    ActionProviderChannelClosed,

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires a pilot repository to be configured before building")]
    MissingRepository,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of the underlying failure, for callers deciding whether to
    /// retry or abort.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Session(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::PilotNotFound(_) => ErrorSeverity::Validation,
            Self::ProviderNotSet
            | Self::ActionProviderChannelClosed
            | Self::MissingOracles
            | Self::MissingRepository
            | Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }
}
