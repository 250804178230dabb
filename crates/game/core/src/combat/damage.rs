//! Damage types, multipliers and weakness maps.

use std::collections::BTreeMap;

use crate::env::Dice;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type carried by a weapon module.
///
/// A target's [`WeaknessMap`] scales incoming damage per type.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Slugs and projectiles.
    Kinetic,
    /// Lasers and beams.
    Energy,
    /// Plasma and explosives.
    Blast,
}

// ============================================================================
// Multiplier
// ============================================================================

/// Fixed-point multiplier stored in hundredths (`1.00` == 100).
///
/// Integer storage keeps `floor(raw * multiplier)` exact and deterministic.
/// Content files write multipliers as decimals (`1.1`, `0.9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Multiplier(u32);

impl Multiplier {
    pub const NEUTRAL: Self = Self(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Scales `value` and truncates toward zero.
    pub const fn apply(self, value: u32) -> u32 {
        ((value as u64 * self.0 as u64) / 100) as u32
    }

    /// Classifies this multiplier from the target's point of view.
    pub fn affinity(self) -> Affinity {
        match self.0.cmp(&Self::NEUTRAL.0) {
            core::cmp::Ordering::Greater => Affinity::Weak,
            core::cmp::Ordering::Less => Affinity::Resistant,
            core::cmp::Ordering::Equal => Affinity::Neutral,
        }
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for Multiplier {
    fn from(value: f64) -> Self {
        let hundredths = (value * 100.0).round();
        Self(if hundredths <= 0.0 { 0 } else { hundredths as u32 })
    }
}

impl From<Multiplier> for f64 {
    fn from(value: Multiplier) -> Self {
        f64::from(value.0) / 100.0
    }
}

impl core::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// How a target reacts to a damage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Affinity {
    /// Multiplier above 1.0.
    Weak,
    /// Multiplier below 1.0.
    Resistant,
    /// Exactly 1.0.
    Neutral,
}

impl Affinity {
    /// Short tag used in status blocks.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Resistant => "res",
            Self::Neutral => "neutral",
        }
    }
}

// ============================================================================
// Weakness Map
// ============================================================================

/// Per-type damage multipliers of a combatant.
///
/// Types absent from the map are neutral. The player always carries an empty
/// map, so enemy fire is never scaled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaknessMap(BTreeMap<DamageType, Multiplier>);

impl WeaknessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, damage_type: DamageType, multiplier: Multiplier) -> Self {
        self.0.insert(damage_type, multiplier);
        self
    }

    pub fn insert(&mut self, damage_type: DamageType, multiplier: Multiplier) {
        self.0.insert(damage_type, multiplier);
    }

    /// Multiplier for `damage_type`, neutral when absent.
    pub fn multiplier(&self, damage_type: DamageType) -> Multiplier {
        self.0.get(&damage_type).copied().unwrap_or_default()
    }

    /// `floor(raw * multiplier[damage_type])`.
    pub fn scale(&self, raw: u32, damage_type: DamageType) -> u32 {
        self.multiplier(damage_type).apply(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in damage-type order.
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, Multiplier)> + '_ {
        self.0.iter().map(|(ty, m)| (*ty, *m))
    }
}

impl FromIterator<(DamageType, Multiplier)> for WeaknessMap {
    fn from_iter<T: IntoIterator<Item = (DamageType, Multiplier)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Roll Range
// ============================================================================

/// Inclusive integer range sampled uniformly (damage, rewards, boosts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Samples a value in `[min, max]`.
    pub fn roll(&self, dice: &mut Dice<'_>) -> u32 {
        dice.range(self.min, self.max)
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl core::fmt::Display for RollRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_truncates() {
        let crit = Multiplier::from_hundredths(180);
        assert_eq!(crit.apply(10), 18);
        assert_eq!(crit.apply(11), 19);
        assert_eq!(Multiplier::from(1.1).apply(5), 5);
        assert_eq!(Multiplier::from(0.9).apply(15), 13);
    }

    #[test]
    fn multiplier_from_decimal_rounds_to_hundredths() {
        assert_eq!(Multiplier::from(1.1), Multiplier::from_hundredths(110));
        assert_eq!(Multiplier::from(0.9), Multiplier::from_hundredths(90));
        assert_eq!(Multiplier::from(-1.0), Multiplier::from_hundredths(0));
        assert_eq!(Multiplier::from_hundredths(120).to_string(), "1.20");
    }

    #[test]
    fn affinity_tags() {
        assert_eq!(Multiplier::from(1.2).affinity(), Affinity::Weak);
        assert_eq!(Multiplier::from(0.9).affinity(), Affinity::Resistant);
        assert_eq!(Multiplier::NEUTRAL.affinity(), Affinity::Neutral);
    }

    #[test]
    fn weakness_map_defaults_to_neutral() {
        let map = WeaknessMap::new().with(DamageType::Blast, Multiplier::from(1.2));
        assert_eq!(map.scale(10, DamageType::Blast), 12);
        assert_eq!(map.scale(10, DamageType::Energy), 10);
        assert_eq!(map.multiplier(DamageType::Kinetic), Multiplier::NEUTRAL);
    }

    #[test]
    fn damage_type_parses_case_insensitively() {
        assert_eq!("Kinetic".parse::<DamageType>(), Ok(DamageType::Kinetic));
        assert_eq!("blast".parse::<DamageType>(), Ok(DamageType::Blast));
        assert!("plasma".parse::<DamageType>().is_err());
        assert_eq!(DamageType::Energy.to_string(), "energy");
    }
}
