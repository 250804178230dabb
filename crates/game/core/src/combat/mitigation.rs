//! Weakness scaling and shields-before-hull absorption.
//!
//! The same routine handles damage in both directions. Only the target
//! record (and its weakness map) differs.

use crate::state::CombatantState;

use super::damage::DamageType;

/// How one damage application was split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage after the weakness multiplier.
    pub effective: u32,
    /// Portion soaked by shields.
    pub absorbed: u32,
    /// Portion that reached the hull.
    pub to_hull: u32,
}

/// Applies already-scaled damage: shields first, remainder to hull.
///
/// Shields never go negative. Hull may, and any value `<= 0` is destroyed.
pub fn apply_damage(target: &mut CombatantState, effective: u32) -> DamageReport {
    let absorbed = target.shields.min(effective);
    target.shields -= absorbed;

    let to_hull = effective - absorbed;
    if to_hull > 0 {
        let hit = i32::try_from(to_hull).unwrap_or(i32::MAX);
        target.hull = target.hull.saturating_sub(hit);
    }

    DamageReport {
        effective,
        absorbed,
        to_hull,
    }
}

/// Scales `raw` by the target's weakness for `damage_type`, then applies it.
pub fn mitigate(target: &mut CombatantState, raw: u32, damage_type: DamageType) -> DamageReport {
    let effective = target.weakness.scale(raw, damage_type);
    apply_damage(target, effective)
}
