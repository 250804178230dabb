//! The enemy's single-roll attack.

use crate::config::CombatConfig;
use crate::env::Dice;
use crate::state::CombatantState;

use super::damage::RollRange;
use super::hit::{classify_enemy_roll, roll_damage};
use super::mitigation::apply_damage;
use super::result::{AttackOutcome, EnemyAttackReport};

/// Resolves one enemy attack against `player`.
///
/// No weakness multiplier applies: the player takes every damage type at
/// face value.
pub fn enemy_attack(
    enemy_name: &str,
    damage: RollRange,
    player: &mut CombatantState,
    dice: &mut Dice<'_>,
    config: &CombatConfig,
) -> EnemyAttackReport {
    let roll = dice.d20();
    let outcome = classify_enemy_roll(roll, config);
    let mut log = Vec::new();

    let Some(raw) = roll_damage(outcome, damage, dice, config) else {
        log.push(format!("{enemy_name} missed their attack! (roll {roll})"));
        return EnemyAttackReport {
            roll,
            outcome,
            damage: None,
            log,
        };
    };

    if outcome == AttackOutcome::Critical {
        log.push(format!("Critical hit from {enemy_name}! (roll {roll})"));
    }

    let report = apply_damage(player, raw);
    if report.absorbed > 0 {
        log.push(format!(
            "{enemy_name} dealt {} damage to your Shields.",
            report.absorbed
        ));
    }
    if report.to_hull > 0 {
        log.push(format!(
            "{enemy_name} dealt {} damage to your Hull.",
            report.to_hull
        ));
    }

    EnemyAttackReport {
        roll,
        outcome,
        damage: Some(report),
        log,
    }
}
