//! State management errors.
//!
//! Errors related to resource accounting and pilot record limits.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::ResourceKind;

/// A spend request exceeded what the pool holds.
///
/// Nothing is deducted when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceError {
    #[error("insufficient {kind}: required {required}, available {available}")]
    Insufficient {
        kind: ResourceKind,
        required: u32,
        available: u32,
    },
}

impl CombatError for ResourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Insufficient {
                kind: ResourceKind::Ammo,
                ..
            } => "RESOURCE_INSUFFICIENT_AMMO",
            Self::Insufficient {
                kind: ResourceKind::Power,
                ..
            } => "RESOURCE_INSUFFICIENT_POWER",
        }
    }
}

/// Errors raised while editing a pilot record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Every module slot on the ship is taken.
    #[error("module slots are full (max: {max})")]
    ModuleSlotsFull { max: usize },
}

impl CombatError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ModuleSlotsFull { .. } => "STATE_MODULE_SLOTS_FULL",
        }
    }
}
