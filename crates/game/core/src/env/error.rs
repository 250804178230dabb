//! Oracle access errors.

use crate::error::{CombatError, ErrorSeverity};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ModuleOracle not available")]
    ModulesNotAvailable,

    #[error("EnemyOracle not available")]
    EnemiesNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("enemy template '{0}' not found")]
    EnemyTemplateNotFound(String),

    #[error("module '{0}' not found")]
    ModuleNotFound(String),
}

impl CombatError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // the engine cannot resolve a turn without these
            ModulesNotAvailable | EnemiesNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            EnemyTemplateNotFound(_) | ModuleNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ModulesNotAvailable => "ORACLE_MODULES_NOT_AVAILABLE",
            EnemiesNotAvailable => "ORACLE_ENEMIES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            EnemyTemplateNotFound(_) => "ORACLE_ENEMY_TEMPLATE_NOT_FOUND",
            ModuleNotFound(_) => "ORACLE_MODULE_NOT_FOUND",
        }
    }
}
