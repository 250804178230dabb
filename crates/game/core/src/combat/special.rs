//! Emergency Power, Scan and Retreat.
//!
//! Each one replaces the Attack action for the turn and never touches the
//! enemy record.

use crate::config::CombatConfig;
use crate::env::Dice;
use crate::state::{CombatantState, ResourcePool};

use super::damage::{Affinity, DamageType, Multiplier};

/// Result of an Emergency Power gamble.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmergencyPowerOutcome {
    /// `rolled` is the sampled boost, `gained` what fit under the ceiling.
    Surge { rolled: u32, gained: u32 },
    /// `systems_damaged` is a log-only flag.
    Overload {
        rolled: u32,
        lost: u32,
        systems_damaged: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyPowerReport {
    pub roll: u32,
    pub outcome: EmergencyPowerOutcome,
    pub log: Vec<String>,
}

pub fn emergency_power(
    resources: &mut ResourcePool,
    dice: &mut Dice<'_>,
    config: &CombatConfig,
) -> EmergencyPowerReport {
    let rules = &config.emergency_power;
    let roll = dice.d20();

    let (outcome, line) = if roll >= rules.success_threshold {
        let rolled = rules.boost.roll(dice);
        let gained = resources.boost_power(rolled, config.power_grid_ceiling);
        (
            EmergencyPowerOutcome::Surge { rolled, gained },
            format!("Emergency Power engaged! Success (roll {roll}). +{rolled} Power Grid."),
        )
    } else {
        let rolled = rules.penalty.roll(dice);
        let lost = resources.drain_power(rolled);
        let systems_damaged = dice.percent(rules.systems_damaged_chance);
        let line = if systems_damaged {
            format!(
                "Overload! (roll {roll}) Systems damaged, -{rolled} Power Grid. Weapons may malfunction."
            )
        } else {
            format!("Overload! (roll {roll}) -{rolled} Power Grid.")
        };
        (
            EmergencyPowerOutcome::Overload {
                rolled,
                lost,
                systems_damaged,
            },
            line,
        )
    };

    EmergencyPowerReport {
        roll,
        outcome,
        log: vec![line],
    }
}

/// One revealed weakness entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanEntry {
    pub damage_type: DamageType,
    pub multiplier: Multiplier,
    pub affinity: Affinity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    pub roll: u32,
    /// `None` when the scan failed.
    pub revealed: Option<Vec<ScanEntry>>,
    pub log: Vec<String>,
}

pub fn scan(enemy: &CombatantState, dice: &mut Dice<'_>, config: &CombatConfig) -> ScanReport {
    let roll = dice.d20();
    if roll <= config.scan_failure_threshold {
        return ScanReport {
            roll,
            revealed: None,
            log: vec![format!("Scan failed (roll {roll}). Enemy sensors scrambled.")],
        };
    }

    let entries: Vec<ScanEntry> = enemy
        .weakness
        .iter()
        .map(|(damage_type, multiplier)| ScanEntry {
            damage_type,
            multiplier,
            affinity: multiplier.affinity(),
        })
        .collect();

    let mut log = Vec::with_capacity(entries.len() + 1);
    log.push(format!("=====[Scan Results]===== (roll {roll})"));
    for entry in &entries {
        let label = title_case(entry.damage_type.as_ref());
        log.push(format!(
            " - {label:<7}: multiplier {} ({})",
            entry.multiplier,
            entry.affinity.tag()
        ));
    }

    ScanReport {
        roll,
        revealed: Some(entries),
        log,
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetreatReport {
    pub success: bool,
    pub log: Vec<String>,
}

/// Flat percentage check, no d20.
pub fn retreat(dice: &mut Dice<'_>, config: &CombatConfig) -> RetreatReport {
    let success = dice.percent(config.retreat_chance);
    let outcome = if success {
        "Retreat successful!"
    } else {
        "Retreat failed! Enemy prevents escape."
    };
    RetreatReport {
        success,
        log: vec!["Attempting to retreat...".to_owned(), outcome.to_owned()],
    }
}
