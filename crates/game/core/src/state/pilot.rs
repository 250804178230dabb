//! Persistent pilot and ship record.
//!
//! The record is what the player store saves between encounters. A session
//! never touches it directly: [`PilotRecord::loadout`] produces the
//! in-combat values, and [`PilotRecord::apply_summary`] writes the results
//! back once the fight is over.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::engine::{CombatOutcome, SessionSummary};
use crate::env::{ModuleId, ModuleOracle, UtilityEffect};

use super::error::StateError;
use super::{CombatantState, ResourcePool};

/// Static hull data for the pilot's current ship.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipProfile {
    pub name: String,
    pub class: String,
    /// Drives end-of-turn power regeneration.
    pub speed: u32,
    /// Regular power grid capacity.
    pub power_grid: u32,
    pub module_slots: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cargo: u32,
}

/// Saved pilot state between encounters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PilotRecord {
    pub name: String,
    pub credits: u64,
    pub ammo: u32,
    pub hull: u32,
    pub armor: u32,
    pub shields: u32,
    /// Grid level at the end of the last fight.
    pub power_grid: u32,
    pub ship: ShipProfile,
    /// Installed modules in installation order (volley order).
    pub modules: ArrayVec<ModuleId, { CombatConfig::MAX_MODULE_SLOTS }>,
}

/// Everything a session needs from the pilot, with module bonuses applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadout {
    pub player: CombatantState,
    pub resources: ResourcePool,
    pub modules: Vec<ModuleId>,
    pub speed: u32,
}

impl PilotRecord {
    /// Fresh pilot flying a Rifter with a Pulse Laser and a mining drill.
    pub fn starter(name: impl Into<String>) -> Self {
        let mut modules = ArrayVec::new();
        modules.push(ModuleId::from("Pulse Laser"));
        modules.push(ModuleId::from("Basic Mining Drill"));

        Self {
            name: name.into(),
            credits: 1000,
            ammo: 50,
            hull: 100,
            armor: 100,
            shields: 100,
            power_grid: 100,
            ship: ShipProfile {
                name: "Rifter".into(),
                class: "Frigate".into(),
                speed: 8,
                power_grid: 100,
                module_slots: 4,
                cargo: 50,
            },
            modules,
        }
    }

    fn slot_limit(&self) -> usize {
        (self.ship.module_slots as usize).min(CombatConfig::MAX_MODULE_SLOTS)
    }

    /// Appends a module to the loadout.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ModuleSlotsFull`] when the ship has no free slot.
    pub fn install_module(&mut self, id: impl Into<ModuleId>) -> Result<(), StateError> {
        let max = self.slot_limit();
        if self.modules.len() >= max {
            return Err(StateError::ModuleSlotsFull { max });
        }
        self.modules
            .try_push(id.into())
            .map_err(|_| StateError::ModuleSlotsFull { max })
    }

    /// Builds the in-combat loadout.
    ///
    /// The grid starts at full capacity. Shield Booster and Reactor Upgrade
    /// bonuses apply for this fight only; unknown modules contribute nothing.
    pub fn loadout<M>(&self, modules: &M) -> Loadout
    where
        M: ModuleOracle + ?Sized,
    {
        let (shield_bonus, power_bonus) = self
            .modules
            .iter()
            .filter_map(|id| modules.module(id).and_then(|def| def.kind.utility()))
            .fold((0u32, 0u32), |(shields, power), effect| match effect {
                UtilityEffect::ShieldBonus(n) => (shields.saturating_add(n), power),
                UtilityEffect::PowerBonus(n) => (shields, power.saturating_add(n)),
                _ => (shields, power),
            });

        Loadout {
            player: CombatantState::new(
                self.name.clone(),
                self.hull,
                self.armor,
                self.shields.saturating_add(shield_bonus),
            ),
            resources: ResourcePool::charged(self.ship.power_grid.saturating_add(power_bonus), self.ammo),
            modules: self.modules.iter().cloned().collect(),
            speed: self.ship.speed,
        }
    }

    /// Writes the end-of-fight state back into the record.
    ///
    /// Hull is clamped at zero. Shields keep the lower of the final value and
    /// the stored one, so booster shields never persist. Victory adds the
    /// salvage reward to the credit balance.
    pub fn apply_summary(&mut self, summary: &SessionSummary) {
        self.hull = summary.player.display_hull();
        self.shields = summary.player.shields.min(self.shields);
        self.power_grid = summary.resources.power_grid;
        self.ammo = summary.resources.ammo;
        if let CombatOutcome::Victory { reward } = summary.outcome {
            self.credits = self.credits.saturating_add(u64::from(reward));
        }
    }
}
