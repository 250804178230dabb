//! Error types for the combat session.

use crate::env::OracleError;
use crate::error::{CombatError, ErrorContext, ErrorSeverity};

/// Errors surfaced by [`CombatSession`](super::CombatSession).
///
/// Rule-level failures never show up here; they are logged inside the turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session already finished after turn {}", .0.turn)]
    AlreadyFinished(ErrorContext),

    #[error("session is still active at turn {}", .0.turn)]
    NotFinished(ErrorContext),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CombatError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyFinished(_) | Self::NotFinished(_) => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::AlreadyFinished(context) | Self::NotFinished(context) => Some(context),
            Self::Oracle(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyFinished(_) => "SESSION_ALREADY_FINISHED",
            Self::NotFinished(_) => "SESSION_NOT_FINISHED",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
