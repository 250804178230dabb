//! Combat session state machine.
//!
//! [`CombatSession`] owns both combatant records and the player's resource
//! pool for one encounter. Each call to [`CombatSession::play_turn`] runs
//! the full turn: player action, enemy attack if the enemy survived, then
//! end-of-turn upkeep if nobody died or left. The session stops accepting
//! turns once an outcome is reached.

mod action;
mod errors;
mod turns;

pub use action::PlayerAction;
pub use errors::SessionError;
pub use turns::{CombatOutcome, SessionSummary, TurnOutcome, TurnReport};

use crate::combat::{RollRange, emergency_power, enemy_attack, resolve_volley, retreat, scan};
use crate::config::CombatConfig;
use crate::env::{CombatEnv, Dice, EnemyTemplate, ModuleId, ModuleOracle, RngOracle};
use crate::error::ErrorContext;
use crate::state::{CombatantState, Loadout, ResourcePool};

/// One encounter between the player and a single enemy.
pub struct CombatSession<'a> {
    modules: &'a dyn ModuleOracle,
    rng: &'a dyn RngOracle,
    config: CombatConfig,
    seed: u64,

    player: CombatantState,
    resources: ResourcePool,
    loadout: Vec<ModuleId>,
    speed: u32,

    enemy: CombatantState,
    enemy_class: String,
    enemy_damage: RollRange,

    turn: u32,
    outcome: Option<CombatOutcome>,
}

impl<'a> CombatSession<'a> {
    /// Starts an encounter at turn 1.
    ///
    /// The enemy record is spawned from `enemy`, so the template itself is
    /// never modified. A side that is already destroyed decides the fight
    /// before any turn is played: a wrecked player ship is a defeat, a wrecked
    /// enemy is a victory with salvage. Such a session reports turn 0.
    ///
    /// # Errors
    ///
    /// Fails if the environment lacks a module registry or an RNG.
    pub fn start(
        env: CombatEnv<'a>,
        config: CombatConfig,
        loadout: Loadout,
        enemy: &EnemyTemplate,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            modules: env.modules()?,
            rng: env.rng()?,
            config,
            seed,
            player: loadout.player,
            resources: loadout.resources,
            loadout: loadout.modules,
            speed: loadout.speed,
            enemy: enemy.spawn(),
            enemy_class: enemy.class.clone(),
            enemy_damage: enemy.damage,
            turn: 1,
            outcome: None,
        };
        session.settle_at_start();
        Ok(session)
    }

    fn settle_at_start(&mut self) {
        if self.player.is_destroyed() {
            self.turn = 0;
            self.outcome = Some(CombatOutcome::Defeat);
        } else if self.enemy.is_destroyed() {
            self.turn = 0;
            let mut upkeep = self.dice(Dice::UPKEEP);
            let reward = self.config.salvage_reward.roll(&mut upkeep);
            self.outcome = Some(CombatOutcome::Victory { reward });
        }
    }

    /// Turn about to be played (or the last one played, once finished).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn player(&self) -> &CombatantState {
        &self.player
    }

    pub fn enemy(&self) -> &CombatantState {
        &self.enemy
    }

    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Encounter banner: `"Combat initiated: <name> (<class>)"`.
    pub fn intro_line(&self) -> String {
        if self.enemy_class.is_empty() {
            format!("Combat initiated: {}", self.enemy.name)
        } else {
            format!("Combat initiated: {} ({})", self.enemy.name, self.enemy_class)
        }
    }

    /// Header shown before the player picks an action.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            format!("--- Turn {} ---", self.turn),
            format!(
                "Player: Hull {} | Armor {} | Shields {} | Power {} | Ammo {}",
                self.player.display_hull(),
                self.player.armor,
                self.player.shields,
                self.resources.power_grid,
                self.resources.ammo
            ),
            self.enemy.status_line(),
        ]
    }

    fn dice(&self, phase: u32) -> Dice<'a> {
        Dice::new(self.rng, self.seed, u64::from(self.turn), phase)
    }

    /// Resolves one full turn.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyFinished`] once an outcome has been
    /// reached.
    pub fn play_turn(&mut self, action: PlayerAction) -> Result<TurnReport, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::AlreadyFinished(
                ErrorContext::new(self.turn).with_message("play_turn after outcome"),
            ));
        }

        let mut log = Vec::new();
        let mut unknown_modules = Vec::new();
        let mut dice = self.dice(Dice::PLAYER);

        match action {
            PlayerAction::Attack => {
                let volley = resolve_volley(
                    &self.loadout,
                    self.modules,
                    &mut self.enemy,
                    &mut self.resources,
                    &mut dice,
                    &self.config,
                );
                log.extend(volley.log);
                unknown_modules = volley.unknown_modules;
            }
            PlayerAction::EmergencyPower => {
                log.extend(emergency_power(&mut self.resources, &mut dice, &self.config).log);
            }
            PlayerAction::Scan => {
                log.extend(scan(&self.enemy, &mut dice, &self.config).log);
            }
            PlayerAction::Retreat => {
                let report = retreat(&mut dice, &self.config);
                log.extend(report.log);
                if report.success {
                    return Ok(self.conclude(action, log, unknown_modules, TurnOutcome::Retreated));
                }
            }
            PlayerAction::Skip => log.push("No valid action chosen, turn skipped.".to_owned()),
        }

        let mut upkeep = self.dice(Dice::UPKEEP);

        if self.enemy.is_destroyed() {
            let reward = self.config.salvage_reward.roll(&mut upkeep);
            log.push(format!("Recovered salvage worth {reward} credits."));
            return Ok(self.conclude(action, log, unknown_modules, TurnOutcome::Victory { reward }));
        }

        let mut enemy_dice = self.dice(Dice::ENEMY);
        let attack = enemy_attack(
            &self.enemy.name,
            self.enemy_damage,
            &mut self.player,
            &mut enemy_dice,
            &self.config,
        );
        log.extend(attack.log);

        if self.player.is_destroyed() {
            log.push("Your ship has been destroyed in combat!".to_owned());
            return Ok(self.conclude(action, log, unknown_modules, TurnOutcome::Defeat));
        }

        self.resources
            .regenerate(self.config.power_regen(self.speed));
        if upkeep.percent(self.config.scavenge_chance) {
            self.resources.add_ammo(1);
            log.push("Passive systems scavenged +1 ammo this turn.".to_owned());
        }

        let report = self.report(action, log, unknown_modules, TurnOutcome::Continue);
        self.turn += 1;
        Ok(report)
    }

    fn conclude(
        &mut self,
        action: PlayerAction,
        log: Vec<String>,
        unknown_modules: Vec<ModuleId>,
        outcome: TurnOutcome,
    ) -> TurnReport {
        self.outcome = outcome.as_combat_outcome();
        self.report(action, log, unknown_modules, outcome)
    }

    fn report(
        &self,
        action: PlayerAction,
        log: Vec<String>,
        unknown_modules: Vec<ModuleId>,
        outcome: TurnOutcome,
    ) -> TurnReport {
        TurnReport {
            turn: self.turn,
            action,
            log,
            outcome,
            player: self.player.clone(),
            enemy: self.enemy.clone(),
            resources: self.resources,
            unknown_modules,
        }
    }

    /// Consumes a finished session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFinished`] while the fight is still on.
    pub fn finish(self) -> Result<SessionSummary, SessionError> {
        let Some(outcome) = self.outcome else {
            return Err(SessionError::NotFinished(ErrorContext::new(self.turn)));
        };
        Ok(SessionSummary {
            outcome,
            turns: self.turn,
            player: self.player,
            enemy: self.enemy,
            resources: self.resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{DamageType, Multiplier, WeaknessMap};
    use crate::env::{
        EnemyOracle, Env, ModuleDefinition, ModuleKind, PcgRng, ScriptedRng, WeaponData,
    };

    struct Fixtures {
        modules: Vec<ModuleDefinition>,
    }

    impl ModuleOracle for Fixtures {
        fn module(&self, id: &ModuleId) -> Option<ModuleDefinition> {
            self.modules.iter().find(|def| &def.id == id).cloned()
        }

        fn all_modules(&self) -> Vec<ModuleDefinition> {
            self.modules.clone()
        }
    }

    impl EnemyOracle for Fixtures {
        fn template(&self, _id: &str) -> Option<EnemyTemplate> {
            None
        }

        fn all_templates(&self) -> Vec<EnemyTemplate> {
            Vec::new()
        }
    }

    fn fixtures() -> Fixtures {
        Fixtures {
            modules: vec![ModuleDefinition::new(
                "Test Gun",
                ModuleKind::Weapon(WeaponData::new(DamageType::Kinetic, RollRange::new(10, 10))),
            )],
        }
    }

    fn target(hull: u32, shields: u32) -> EnemyTemplate {
        EnemyTemplate {
            id: "target".into(),
            name: "Target".into(),
            class: "Drone".into(),
            hull,
            armor: 0,
            shields,
            weakness: WeaknessMap::new(),
            damage: RollRange::new(5, 5),
            accuracy: 0,
        }
    }

    fn loadout(hull: u32, shields: u32, ammo: u32) -> Loadout {
        Loadout {
            player: CombatantState::new("Pilot", hull, 100, shields),
            resources: ResourcePool::charged(100, ammo),
            modules: vec![ModuleId::from("Test Gun")],
            speed: 8,
        }
    }

    fn session<'a>(
        fixtures: &'a Fixtures,
        rng: &'a dyn RngOracle,
        loadout: Loadout,
        enemy: &EnemyTemplate,
    ) -> CombatSession<'a> {
        let env: CombatEnv<'a> = Env::new(
            Some(fixtures as &dyn ModuleOracle),
            Some(fixtures as &dyn EnemyOracle),
            Some(rng),
        );
        CombatSession::start(env, CombatConfig::default(), loadout, enemy, 7).unwrap()
    }

    #[test]
    fn critical_kill_skips_enemy_attack() {
        let fixtures = fixtures();
        // d20 = 20, damage 10 -> 18; salvage 150
        let rng = ScriptedRng::new([20, 10, 150]);
        let mut session = session(&fixtures, &rng, loadout(100, 0, 0), &target(5, 0));

        let report = session.play_turn(PlayerAction::Attack).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Victory { reward: 150 });
        assert!(report.enemy.hull <= 0);
        assert_eq!(report.player.hull, 100);
        assert!(!report.log.iter().any(|line| line.contains("Target dealt")));
        assert_eq!(session.outcome(), Some(CombatOutcome::Victory { reward: 150 }));
    }

    #[test]
    fn normal_hit_then_enemy_miss() {
        let fixtures = fixtures();
        // weapon d20 10, damage 10; enemy d20 3 misses; scavenge roll 100
        let rng = ScriptedRng::new([10, 10, 3, 100]);
        let mut session = session(&fixtures, &rng, loadout(100, 0, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::Attack).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Continue);
        assert_eq!(report.enemy.hull, 40);
        assert_eq!(report.player.hull, 100);
        assert!(report.log.iter().any(|line| line.contains("missed their attack")));
        assert_eq!(session.turn(), 2);
    }

    #[test]
    fn successful_retreat_ends_before_enemy_acts() {
        let fixtures = fixtures();
        let rng = ScriptedRng::new([1]);
        let mut session = session(&fixtures, &rng, loadout(100, 0, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::Retreat).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Retreated);
        assert_eq!(report.player.hull, 100);
        assert_eq!(rng.remaining(), 0);
        assert!(matches!(
            session.play_turn(PlayerAction::Attack),
            Err(SessionError::AlreadyFinished(_))
        ));

        let summary = session.finish().unwrap();
        assert_eq!(summary.outcome, CombatOutcome::Retreated);
        assert_eq!(summary.turns, 1);
    }

    #[test]
    fn failed_retreat_still_takes_fire() {
        let fixtures = fixtures();
        // retreat d100 = 90 fails; enemy d20 10, damage 5; scavenge 100
        let rng = ScriptedRng::new([90, 10, 5, 100]);
        let mut session = session(&fixtures, &rng, loadout(100, 0, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::Retreat).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Continue);
        assert_eq!(report.player.hull, 95);
        assert!(report.log.contains(&"Retreat failed! Enemy prevents escape.".to_owned()));
    }

    #[test]
    fn skip_turn_lets_enemy_attack() {
        let fixtures = fixtures();
        // enemy d20 12 hits for 5 into shields; scavenge roll 1 grants ammo
        let rng = ScriptedRng::new([12, 5, 1]);
        let mut session = session(&fixtures, &rng, loadout(100, 20, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::from_input("dance")).unwrap();

        assert_eq!(report.action, PlayerAction::Skip);
        assert_eq!(report.log[0], "No valid action chosen, turn skipped.");
        assert_eq!(report.player.shields, 15);
        assert_eq!(report.resources.ammo, 1);
    }

    #[test]
    fn defeat_is_detected_immediately() {
        let fixtures = fixtures();
        // scan d20 12; enemy d20 5 hits for 5
        let rng = ScriptedRng::new([12, 5, 5]);
        let mut session = session(&fixtures, &rng, loadout(4, 0, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::Scan).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Defeat);
        assert_eq!(report.player.hull, -1);
        assert_eq!(rng.remaining(), 0);
        assert!(report.player.is_destroyed());
        assert_eq!(session.finish().unwrap().outcome, CombatOutcome::Defeat);
    }

    #[test]
    fn regen_applies_only_while_active() {
        let fixtures = fixtures();
        // overload d20 3, penalty 8, no systems damage; enemy misses; no scavenge
        let rng = ScriptedRng::new([3, 8, 100, 3, 100]);
        let mut drained = loadout(100, 0, 0);
        drained.resources.power_grid = 50;
        let mut session = session(&fixtures, &rng, drained, &target(50, 0));

        let report = session.play_turn(PlayerAction::EmergencyPower).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Continue);
        // 50 - 8 + max(3, 8 / 2)
        assert_eq!(report.resources.power_grid, 46);
        assert_eq!(report.log[0], "Overload! (roll 3) -8 Power Grid.");
    }

    #[test]
    fn surge_settles_back_to_capacity_at_upkeep() {
        let fixtures = fixtures();
        // surge d20 14, boost 30; enemy d20 3 misses; no scavenge
        let rng = ScriptedRng::new([14, 30, 3, 100]);
        let mut session = session(&fixtures, &rng, loadout(100, 0, 0), &target(50, 0));

        let report = session.play_turn(PlayerAction::EmergencyPower).unwrap();

        assert_eq!(report.outcome, TurnOutcome::Continue);
        assert_eq!(report.log[0], "Emergency Power engaged! Success (roll 14). +30 Power Grid.");
        assert_eq!(report.resources.power_grid, report.resources.capacity);
        assert_eq!(session.resources().power_grid, 100);
    }

    #[test]
    fn wrecked_player_loses_without_a_turn() {
        let fixtures = fixtures();
        let rng = ScriptedRng::new([20, 10, 150]);
        let mut session = session(&fixtures, &rng, loadout(0, 0, 0), &target(5, 0));

        assert!(session.is_finished());
        assert_eq!(session.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(rng.remaining(), 3);
        assert!(matches!(
            session.play_turn(PlayerAction::Attack),
            Err(SessionError::AlreadyFinished(_))
        ));

        let summary = session.finish().unwrap();
        assert_eq!(summary.turns, 0);
        assert_eq!(summary.player.hull, 0);
        assert_eq!(summary.enemy.hull, 5);
    }

    #[test]
    fn wrecked_enemy_yields_salvage_without_a_turn() {
        let fixtures = fixtures();
        let rng = ScriptedRng::new([200]);
        let session = session(&fixtures, &rng, loadout(100, 0, 0), &target(0, 0));

        assert_eq!(session.outcome(), Some(CombatOutcome::Victory { reward: 200 }));
        assert_eq!(rng.remaining(), 0);
        assert_eq!(session.finish().unwrap().turns, 0);
    }

    #[test]
    fn finish_requires_outcome() {
        let fixtures = fixtures();
        let rng = PcgRng;
        let session = session(&fixtures, &rng, loadout(100, 0, 0), &target(50, 0));
        assert!(matches!(session.finish(), Err(SessionError::NotFinished(_))));
    }

    #[test]
    fn same_seed_replays_identically() {
        let fixtures = fixtures();
        let rng = PcgRng;
        let enemy = EnemyTemplate {
            weakness: WeaknessMap::new().with(DamageType::Kinetic, Multiplier::from(1.1)),
            ..target(200, 30)
        };

        let play = || {
            let mut session = session(&fixtures, &rng, loadout(100, 50, 10), &enemy);
            let mut logs = Vec::new();
            while !session.is_finished() && session.turn() <= 30 {
                logs.push(session.play_turn(PlayerAction::Attack).unwrap().log);
            }
            logs
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn missing_rng_is_fatal() {
        let fixtures = fixtures();
        let env: CombatEnv<'_> = Env::new(
            Some(&fixtures as &dyn ModuleOracle),
            Some(&fixtures as &dyn EnemyOracle),
            None,
        );
        let result = CombatSession::start(
            env,
            CombatConfig::default(),
            loadout(100, 0, 0),
            &target(50, 0),
            1,
        );
        assert!(matches!(
            result,
            Err(SessionError::Oracle(crate::env::OracleError::RngNotAvailable))
        ));
    }
}
