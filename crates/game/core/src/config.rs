use crate::combat::{Multiplier, RollRange};

/// Combat rule constants and tunable parameters.
///
/// Every threshold the rules consult lives here so that content files can
/// rebalance an encounter without touching the resolver code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Absolute ceiling for the player's power grid (Emergency Power cannot exceed it).
    pub power_grid_ceiling: u32,
    /// d20 face that always scores a critical hit.
    pub critical_roll: u32,
    /// Damage multiplier applied on a critical hit (truncated).
    pub critical_multiplier: Multiplier,
    /// Player weapon rolls at or below this value misfire.
    pub weapon_miss_threshold: u32,
    /// Enemy attack rolls at or below this value miss.
    pub enemy_miss_threshold: u32,
    /// Scan rolls at or below this value fail.
    pub scan_failure_threshold: u32,
    /// Retreat success chance in percent.
    pub retreat_chance: u32,
    /// Chance in percent of scavenging +1 ammo at end of turn.
    pub scavenge_chance: u32,
    /// Minimum power regenerated at end of turn (otherwise `speed / 2`).
    pub min_power_regen: u32,
    /// Credits granted on victory.
    pub salvage_reward: RollRange,
    pub emergency_power: EmergencyPowerRules,
}

/// Parameters of the Emergency Power gamble.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmergencyPowerRules {
    /// d20 rolls at or above this value succeed.
    pub success_threshold: u32,
    pub boost: RollRange,
    pub penalty: RollRange,
    /// Chance in percent that a failed overload also reports damaged systems.
    pub systems_damaged_chance: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of modules a ship can carry.
    pub const MAX_MODULE_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_POWER_GRID_CEILING: u32 = 140;
    pub const DEFAULT_CRITICAL_ROLL: u32 = 20;
    pub const DEFAULT_WEAPON_MISS_THRESHOLD: u32 = 2;
    pub const DEFAULT_ENEMY_MISS_THRESHOLD: u32 = 3;
    pub const DEFAULT_SCAN_FAILURE_THRESHOLD: u32 = 5;
    pub const DEFAULT_RETREAT_CHANCE: u32 = 50;
    pub const DEFAULT_SCAVENGE_CHANCE: u32 = 5;
    pub const DEFAULT_MIN_POWER_REGEN: u32 = 3;

    pub fn new() -> Self {
        Self {
            power_grid_ceiling: Self::DEFAULT_POWER_GRID_CEILING,
            critical_roll: Self::DEFAULT_CRITICAL_ROLL,
            critical_multiplier: Multiplier::from_hundredths(180),
            weapon_miss_threshold: Self::DEFAULT_WEAPON_MISS_THRESHOLD,
            enemy_miss_threshold: Self::DEFAULT_ENEMY_MISS_THRESHOLD,
            scan_failure_threshold: Self::DEFAULT_SCAN_FAILURE_THRESHOLD,
            retreat_chance: Self::DEFAULT_RETREAT_CHANCE,
            scavenge_chance: Self::DEFAULT_SCAVENGE_CHANCE,
            min_power_regen: Self::DEFAULT_MIN_POWER_REGEN,
            salvage_reward: RollRange::new(150, 400),
            emergency_power: EmergencyPowerRules::default(),
        }
    }

    /// Power regenerated at the end of a turn for a ship of the given speed.
    pub fn power_regen(&self, speed: u32) -> u32 {
        self.min_power_regen.max(speed / 2)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for EmergencyPowerRules {
    fn default() -> Self {
        Self {
            success_threshold: 14,
            boost: RollRange::new(12, 30),
            penalty: RollRange::new(8, 25),
            systems_damaged_chance: 20,
        }
    }
}
