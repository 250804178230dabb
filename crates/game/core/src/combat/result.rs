//! Combat result types.

use std::collections::BTreeMap;

use crate::env::ModuleId;
use crate::state::ResourceKind;

use super::damage::DamageType;
use super::mitigation::DamageReport;

/// Outcome of an attack roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

/// What happened to one weapon during a volley.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Roll at or below the miss threshold. No resource spent.
    Misfire,
    /// The weapon could not pay its cost. No resource spent.
    Insufficient(ResourceKind),
    Fired {
        damage_type: DamageType,
        critical: bool,
        /// Damage before the weakness multiplier.
        raw: u32,
        report: DamageReport,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    pub module: ModuleId,
    pub roll: u32,
    pub outcome: ShotOutcome,
}

/// Everything one Attack action produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolleyReport {
    /// One entry per weapon, in installation order.
    pub shots: Vec<ShotResult>,
    /// Installed ids the module registry does not know.
    pub unknown_modules: Vec<ModuleId>,
    /// Raw damage per type from weapons that fired.
    pub damage_by_type: BTreeMap<DamageType, u32>,
    pub log: Vec<String>,
}

impl VolleyReport {
    /// Effective damage dealt across all shots.
    pub fn total_damage(&self) -> u32 {
        self.shots
            .iter()
            .map(|shot| match &shot.outcome {
                ShotOutcome::Fired { report, .. } => report.effective,
                _ => 0,
            })
            .sum()
    }
}

/// Result of the enemy's attack routine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttackReport {
    pub roll: u32,
    pub outcome: AttackOutcome,
    /// `None` on a miss.
    pub damage: Option<DamageReport>,
    pub log: Vec<String>,
}
