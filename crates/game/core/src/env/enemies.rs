//! Enemy template definitions and oracle interface.
//!
//! Templates are immutable content. A session spawns its own
//! [`CombatantState`] from a template so the template itself is never
//! damaged.

use crate::combat::{RollRange, WeaknessMap};
use crate::state::CombatantState;

pub trait EnemyOracle: Send + Sync {
    fn template(&self, id: &str) -> Option<EnemyTemplate>;

    #[cfg(feature = "std")]
    fn all_templates(&self) -> Vec<EnemyTemplate>;
}

/// Static description of an enemy ship.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    /// Hull class shown in the encounter header ("Frigate").
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: String,
    pub hull: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shields: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weakness: WeaknessMap,
    pub damage: RollRange,
    /// Flavor only: the attack routine uses the fixed miss threshold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: u32,
}

impl EnemyTemplate {
    /// Fresh combatant record for a new encounter.
    pub fn spawn(&self) -> CombatantState {
        CombatantState::new(self.name.clone(), self.hull, self.armor, self.shields)
            .with_weakness(self.weakness.clone())
    }
}
