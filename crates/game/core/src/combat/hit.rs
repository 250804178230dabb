//! Roll classification and raw damage sampling.

use crate::config::CombatConfig;
use crate::env::Dice;

use super::damage::RollRange;
use super::result::AttackOutcome;

/// Classifies a player weapon d20.
///
/// The critical face wins over the miss threshold, so a rule set with a
/// high miss threshold still crits on a natural 20.
pub fn classify_weapon_roll(roll: u32, config: &CombatConfig) -> AttackOutcome {
    if roll == config.critical_roll {
        AttackOutcome::Critical
    } else if roll <= config.weapon_miss_threshold {
        AttackOutcome::Miss
    } else {
        AttackOutcome::Hit
    }
}

/// Classifies an enemy attack d20.
pub fn classify_enemy_roll(roll: u32, config: &CombatConfig) -> AttackOutcome {
    if roll <= config.enemy_miss_threshold {
        AttackOutcome::Miss
    } else if roll == config.critical_roll {
        AttackOutcome::Critical
    } else {
        AttackOutcome::Hit
    }
}

/// Samples raw damage for a connecting attack.
///
/// Misses draw nothing and return `None`. Criticals apply the critical
/// multiplier, truncated.
pub fn roll_damage(
    outcome: AttackOutcome,
    range: RollRange,
    dice: &mut Dice<'_>,
    config: &CombatConfig,
) -> Option<u32> {
    match outcome {
        AttackOutcome::Miss => None,
        AttackOutcome::Hit => Some(range.roll(dice)),
        AttackOutcome::Critical => Some(config.critical_multiplier.apply(range.roll(dice))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn weapon_roll_bands() {
        let config = CombatConfig::default();
        assert_eq!(classify_weapon_roll(1, &config), AttackOutcome::Miss);
        assert_eq!(classify_weapon_roll(2, &config), AttackOutcome::Miss);
        assert_eq!(classify_weapon_roll(3, &config), AttackOutcome::Hit);
        assert_eq!(classify_weapon_roll(19, &config), AttackOutcome::Hit);
        assert_eq!(classify_weapon_roll(20, &config), AttackOutcome::Critical);
    }

    #[test]
    fn enemy_roll_bands() {
        let config = CombatConfig::default();
        for roll in 1..=3 {
            assert_eq!(classify_enemy_roll(roll, &config), AttackOutcome::Miss);
        }
        assert_eq!(classify_enemy_roll(4, &config), AttackOutcome::Hit);
        assert_eq!(classify_enemy_roll(20, &config), AttackOutcome::Critical);
    }

    #[test]
    fn critical_damage_is_truncated() {
        let config = CombatConfig::default();
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 1, 1, Dice::PLAYER);
        let range = RollRange::new(11, 11);
        assert_eq!(
            roll_damage(AttackOutcome::Critical, range, &mut dice, &config),
            Some(19)
        );
        assert_eq!(
            roll_damage(AttackOutcome::Hit, range, &mut dice, &config),
            Some(11)
        );

        let draws = dice.draws();
        assert_eq!(roll_damage(AttackOutcome::Miss, range, &mut dice, &config), None);
        assert_eq!(dice.draws(), draws);
    }
}
