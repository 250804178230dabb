//! Traits describing read-only combat data.
//!
//! Oracles expose module definitions, enemy templates and randomness. The
//! [`Env`] aggregate bundles them so the session can reach everything it
//! needs without hard coupling to concrete implementations.
mod enemies;
mod error;
mod modules;
mod rng;

pub use enemies::{EnemyOracle, EnemyTemplate};
pub use error::OracleError;
pub use modules::{ModuleDefinition, ModuleId, ModuleKind, ModuleOracle, UtilityEffect, WeaponData};
#[cfg(feature = "std")]
pub use rng::ScriptedRng;
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};

/// Aggregates read-only oracles required by the combat session.
pub struct Env<'a, M, E, R>
where
    M: ModuleOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    modules: Option<&'a M>,
    enemies: Option<&'a E>,
    rng: Option<&'a R>,
}

// Manual impls: derive would require the (unsized) oracle types to be Copy.
impl<M, E, R> Clone for Env<'_, M, E, R>
where
    M: ModuleOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, E, R> Copy for Env<'_, M, E, R>
where
    M: ModuleOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type CombatEnv<'a> = Env<'a, dyn ModuleOracle + 'a, dyn EnemyOracle + 'a, dyn RngOracle + 'a>;

impl<'a, M, E, R> Env<'a, M, E, R>
where
    M: ModuleOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(modules: Option<&'a M>, enemies: Option<&'a E>, rng: Option<&'a R>) -> Self {
        Self {
            modules,
            enemies,
            rng,
        }
    }

    pub fn with_all(modules: &'a M, enemies: &'a E, rng: &'a R) -> Self {
        Self::new(Some(modules), Some(enemies), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            modules: None,
            enemies: None,
            rng: None,
        }
    }

    /// Returns the ModuleOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ModulesNotAvailable` if no module oracle was provided.
    pub fn modules(&self) -> Result<&'a M, OracleError> {
        self.modules.ok_or(OracleError::ModulesNotAvailable)
    }

    /// Returns the EnemyOracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a E, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Looks up an enemy template by id.
    ///
    /// # Errors
    ///
    /// Fails if no enemy oracle was provided or the id is unknown.
    pub fn enemy_template(&self, id: &str) -> Result<EnemyTemplate, OracleError> {
        self.enemies()?
            .template(id)
            .ok_or_else(|| OracleError::EnemyTemplateNotFound(id.to_owned()))
    }
}

impl<'a, M, E, R> Env<'a, M, E, R>
where
    M: ModuleOracle + 'a,
    E: EnemyOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `CombatEnv`.
    pub fn as_combat_env(&self) -> CombatEnv<'a> {
        let modules: Option<&'a dyn ModuleOracle> = self.modules.map(|modules| modules as _);
        let enemies: Option<&'a dyn EnemyOracle> = self.enemies.map(|enemies| enemies as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(modules, enemies, rng)
    }
}
