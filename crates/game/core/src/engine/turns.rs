//! Per-turn and per-session results.

use strum::IntoEnumIterator;

use crate::combat::DamageType;
use crate::env::ModuleId;
use crate::state::{CombatantState, ResourcePool};

use super::action::PlayerAction;

/// How a resolved turn left the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    Continue,
    Victory { reward: u32 },
    Defeat,
    Retreated,
}

impl TurnOutcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }

    pub const fn as_combat_outcome(self) -> Option<CombatOutcome> {
        match self {
            Self::Continue => None,
            Self::Victory { reward } => Some(CombatOutcome::Victory { reward }),
            Self::Defeat => Some(CombatOutcome::Defeat),
            Self::Retreated => Some(CombatOutcome::Retreated),
        }
    }
}

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatOutcome {
    /// Enemy destroyed; `reward` credits of salvage recovered.
    Victory { reward: u32 },
    Defeat,
    Retreated,
}

/// Everything one turn produced, handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,
    pub action: PlayerAction,
    pub log: Vec<String>,
    pub outcome: TurnOutcome,
    pub player: CombatantState,
    pub enemy: CombatantState,
    pub resources: ResourcePool,
    /// Loadout entries the module registry did not recognize.
    pub unknown_modules: Vec<ModuleId>,
}

impl TurnReport {
    /// Status block for both ships with weakness tags.
    ///
    /// The player is listed neutral to every damage type.
    pub fn status_block(&self) -> Vec<String> {
        let enemy_tags: Vec<String> = self
            .enemy
            .weakness
            .iter()
            .map(|(ty, multiplier)| format!("{ty}={}", multiplier.affinity().tag()))
            .collect();
        let player_tags: Vec<String> = DamageType::iter().map(|ty| format!("{ty}=neutral")).collect();

        let mut lines = Vec::with_capacity(6);
        for (ship, tags) in [(&self.enemy, enemy_tags), (&self.player, player_tags)] {
            lines.push(format!("{}:", ship.name));
            lines.push(format!(
                " Hull : {} | Armor: {} | Shield: {}",
                ship.display_hull(),
                ship.armor,
                ship.shields
            ));
            lines.push(format!(" Weakness tags: {}", tags.join(", ")));
        }
        lines
    }
}

/// Final state of a finished session, ready to be written back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub outcome: CombatOutcome,
    pub turns: u32,
    pub player: CombatantState,
    pub enemy: CombatantState,
    pub resources: ResourcePool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Multiplier, WeaknessMap};

    #[test]
    fn status_block_tags_weaknesses() {
        let report = TurnReport {
            turn: 1,
            action: PlayerAction::Scan,
            log: Vec::new(),
            outcome: TurnOutcome::Continue,
            player: CombatantState::new("ShiroWalker", 100, 100, 80),
            enemy: CombatantState::new("Sholen Raider", 100, 98, 60).with_weakness(
                WeaknessMap::new()
                    .with(DamageType::Kinetic, Multiplier::from(1.1))
                    .with(DamageType::Energy, Multiplier::from(0.9)),
            ),
            resources: ResourcePool::charged(100, 50),
            unknown_modules: Vec::new(),
        };

        let block = report.status_block();
        assert_eq!(block[0], "Sholen Raider:");
        assert_eq!(block[1], " Hull : 100 | Armor: 98 | Shield: 60");
        assert_eq!(block[2], " Weakness tags: kinetic=weak, energy=res");
        assert_eq!(block[3], "ShiroWalker:");
        assert_eq!(
            block[5],
            " Weakness tags: kinetic=neutral, energy=neutral, blast=neutral"
        );
    }

    #[test]
    fn only_continue_is_non_terminal() {
        assert!(!TurnOutcome::Continue.is_terminal());
        assert_eq!(TurnOutcome::Continue.as_combat_outcome(), None);
        assert_eq!(
            TurnOutcome::Victory { reward: 150 }.as_combat_outcome(),
            Some(CombatOutcome::Victory { reward: 150 })
        );
        assert!(TurnOutcome::Defeat.is_terminal());
    }
}
