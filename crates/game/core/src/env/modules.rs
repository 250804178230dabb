use crate::combat::{DamageType, Multiplier, RollRange};
use crate::state::{ResourceCost, ResourceKind};

/// Read-only lookup of ship module definitions by id.
pub trait ModuleOracle: Send + Sync {
    fn module(&self, id: &ModuleId) -> Option<ModuleDefinition>;

    /// Returns every module definition known to this oracle.
    #[cfg(feature = "std")]
    fn all_modules(&self) -> Vec<ModuleDefinition>;
}

/// Module identifier as it appears in a ship's loadout ("Pulse Laser").
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModuleId(pub String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static definition of an installable module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDefinition {
    pub id: ModuleId,
    pub kind: ModuleKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ModuleDefinition {
    pub fn new(id: impl Into<ModuleId>, kind: ModuleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Module category with category-specific data.
///
/// Only [`ModuleKind::Weapon`] takes part in a volley. Utility bonuses are
/// folded into the ship's loadout when a session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModuleKind {
    Weapon(WeaponData),
    Mining { power_cost: u32, efficiency: Multiplier },
    Utility(UtilityEffect),
    /// Scanner arrays, warp stabilizers and other story modules.
    Special,
}

impl ModuleKind {
    pub fn weapon(&self) -> Option<WeaponData> {
        match self {
            Self::Weapon(data) => Some(*data),
            _ => None,
        }
    }

    pub fn utility(&self) -> Option<UtilityEffect> {
        match self {
            Self::Utility(effect) => Some(*effect),
            _ => None,
        }
    }
}

/// Passive effect of a utility module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtilityEffect {
    CargoBonus(u32),
    PassengerCapacity(u32),
    /// Extra shields for the duration of a fight.
    ShieldBonus(u32),
    /// Extra power grid capacity for the duration of a fight.
    PowerBonus(u32),
    RepairRate(u32),
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage_type: DamageType,
    pub damage: RollRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_cost: u32,
}

impl WeaponData {
    pub const fn new(damage_type: DamageType, damage: RollRange) -> Self {
        Self {
            damage_type,
            damage,
            ammo_cost: 0,
            power_cost: 0,
        }
    }

    #[must_use]
    pub const fn with_ammo_cost(mut self, cost: u32) -> Self {
        self.ammo_cost = cost;
        self
    }

    #[must_use]
    pub const fn with_power_cost(mut self, cost: u32) -> Self {
        self.power_cost = cost;
        self
    }

    /// Resource charged per shot. Ammo takes precedence when both are set.
    pub const fn cost(&self) -> Option<ResourceCost> {
        if self.ammo_cost > 0 {
            Some(ResourceCost::new(ResourceKind::Ammo, self.ammo_cost))
        } else if self.power_cost > 0 {
            Some(ResourceCost::new(ResourceKind::Power, self.power_cost))
        } else {
            None
        }
    }
}
