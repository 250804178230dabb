//! Deterministic space-combat rules.
//!
//! `combat-core` defines the canonical combat rules (weapon volleys, resource
//! ledger, mitigation, special actions, enemy attacks) and the session state
//! machine that strings them into turns. It performs no I/O: every outcome is
//! returned as a report with its log lines, and all randomness flows through
//! an injected [`RngOracle`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use combat::{
    Affinity, AttackOutcome, DamageReport, DamageType, Multiplier, RollRange, VolleyReport,
    WeaknessMap,
};
pub use config::{CombatConfig, EmergencyPowerRules};
pub use engine::{
    CombatOutcome, CombatSession, PlayerAction, SessionError, SessionSummary, TurnOutcome,
    TurnReport,
};
#[cfg(feature = "std")]
pub use env::ScriptedRng;
pub use env::{
    CombatEnv, Dice, EnemyOracle, EnemyTemplate, Env, ModuleDefinition, ModuleId, ModuleKind,
    ModuleOracle, OracleError, PcgRng, RngOracle, UtilityEffect, WeaponData, compute_seed,
};
pub use error::{CombatError, ErrorContext, ErrorSeverity};
pub use state::{
    CombatantState, Loadout, PilotRecord, ResourceCost, ResourceError, ResourceKind, ResourcePool,
    ShipProfile, StateError,
};
