//! Runtime wrappers around static combat content.
//!
//! These implementations expose the `combat-core` oracle traits and bundle
//! them into an [`OracleManager`] so the runtime can build a
//! [`combat_core::CombatEnv`] for each encounter. The data is immutable at
//! runtime; pilot state lives in repositories.
mod enemies;
mod modules;

use std::sync::Arc;

use combat_content::{builtin_enemies, builtin_modules};
use combat_core::{CombatEnv, EnemyOracle, Env, ModuleOracle, PcgRng, RngOracle};

pub use enemies::EnemyOracleImpl;
pub use modules::ModuleOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) modules: Arc<ModuleOracleImpl>,
    pub(crate) enemies: Arc<EnemyOracleImpl>,
    pub(crate) rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager using [`PcgRng`].
    pub fn new(modules: Arc<ModuleOracleImpl>, enemies: Arc<EnemyOracleImpl>) -> Self {
        Self {
            modules,
            enemies,
            rng: Arc::new(PcgRng),
        }
    }

    /// Oracles over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(ModuleOracleImpl::from_definitions(builtin_modules())),
            Arc::new(EnemyOracleImpl::from_templates(builtin_enemies())),
        )
    }

    /// Replaces the dice source, e.g. with a `ScriptedRng` in tests.
    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Arc::new(rng);
        self
    }

    /// Converts oracle manager into the environment a session runs against
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        let modules: &dyn ModuleOracle = self.modules.as_ref();
        let enemies: &dyn EnemyOracle = self.enemies.as_ref();
        Env::new(Some(modules), Some(enemies), Some(self.rng.as_ref()))
    }

    pub fn modules(&self) -> &ModuleOracleImpl {
        &self.modules
    }

    pub fn enemies(&self) -> &EnemyOracleImpl {
        &self.enemies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_content::DEFAULT_ENEMY_ID;
    use combat_core::ModuleId;

    #[test]
    fn builtin_env_resolves_catalog_entries() {
        let oracles = OracleManager::builtin();
        let env = oracles.as_combat_env();

        let raider = env.enemy_template(DEFAULT_ENEMY_ID).unwrap();
        assert_eq!(raider.name, "Sholen Raider");
        assert!(
            env.modules()
                .unwrap()
                .module(&ModuleId::from("Pulse Laser"))
                .and_then(|def| def.kind.weapon())
                .is_some()
        );
        assert!(env.enemy_template("unknown").is_err());
    }
}
