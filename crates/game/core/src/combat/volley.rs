//! Weapon volley resolution for the Attack action.
//!
//! Every installed weapon fires once, in installation order. Each failure
//! (misfire, missing ammo or power) only skips that weapon; the volley as a
//! whole never fails.

use crate::config::CombatConfig;
use crate::env::{Dice, ModuleId, ModuleOracle};
use crate::state::{CombatantState, ResourceError, ResourceKind, ResourcePool};

use super::hit::{classify_weapon_roll, roll_damage};
use super::mitigation::mitigate;
use super::result::{AttackOutcome, ShotOutcome, ShotResult, VolleyReport};

/// Fires every weapon in `loadout` at `enemy`.
///
/// Modules unknown to `registry` are skipped and listed in
/// [`VolleyReport::unknown_modules`]; non-weapon modules are skipped silently.
pub fn resolve_volley<M>(
    loadout: &[ModuleId],
    registry: &M,
    enemy: &mut CombatantState,
    resources: &mut ResourcePool,
    dice: &mut Dice<'_>,
    config: &CombatConfig,
) -> VolleyReport
where
    M: ModuleOracle + ?Sized,
{
    let mut report = VolleyReport::default();
    report.log.push("=====[Combat Log]=====".to_owned());

    for id in loadout {
        let Some(definition) = registry.module(id) else {
            report.unknown_modules.push(id.clone());
            continue;
        };
        let Some(weapon) = definition.kind.weapon() else {
            continue;
        };

        let roll = dice.d20();
        let outcome = classify_weapon_roll(roll, config);
        let raw = roll_damage(outcome, weapon.damage, dice, config);

        if outcome == AttackOutcome::Critical {
            report
                .log
                .push(format!("Crit! {id} scored a critical (roll {roll})."));
        }

        let Some(raw) = raw else {
            report.log.push(format!("{id} misfired (roll {roll})."));
            report.shots.push(ShotResult {
                module: id.clone(),
                roll,
                outcome: ShotOutcome::Misfire,
            });
            continue;
        };

        if let Some(cost) = weapon.cost()
            && let Err(ResourceError::Insufficient { kind, .. }) = resources.try_spend(cost)
        {
            report.log.push(match kind {
                ResourceKind::Ammo => format!("{id} has insufficient ammo, cannot fire."),
                ResourceKind::Power => format!("{id} failed to fire (insufficient power)."),
            });
            report.shots.push(ShotResult {
                module: id.clone(),
                roll,
                outcome: ShotOutcome::Insufficient(kind),
            });
            continue;
        }

        let damage = mitigate(enemy, raw, weapon.damage_type);
        if damage.absorbed > 0 {
            report.log.push(format!(
                "{id} deals {} pts damage to Shields. (roll {roll})",
                damage.absorbed
            ));
        }
        if damage.to_hull > 0 {
            report.log.push(format!(
                "{id} deals {} pts to Hull ({}). (roll {roll})",
                damage.to_hull, weapon.damage_type
            ));
        }

        *report.damage_by_type.entry(weapon.damage_type).or_default() += raw;
        report.shots.push(ShotResult {
            module: id.clone(),
            roll,
            outcome: ShotOutcome::Fired {
                damage_type: weapon.damage_type,
                critical: outcome == AttackOutcome::Critical,
                raw,
                report: damage,
            },
        });
    }

    if report.shots.is_empty() {
        report
            .log
            .push("No weapons installed or available to fire.".to_owned());
    }

    report.log.push(enemy.status_line());
    report.log.push("Rolls:".to_owned());
    for shot in &report.shots {
        report
            .log
            .push(format!(" - {}: d20={}", shot.module, shot.roll));
    }

    report
}
