//! Data-driven combat content and loaders.
//!
//! This crate houses static combat content and provides loaders for RON/TOML
//! data files:
//! - Module catalog (weapons, drills, utility and special modules)
//! - Enemy templates
//! - The starter pilot record
//! - Combat rule constants
//!
//! Content is consumed by runtime oracles and never appears in session state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    DEFAULT_ENEMY_ID, DEFAULT_PILOT_NAME, builtin_enemies, builtin_modules, pirate_raider,
    starter_pilot,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyCatalog, EnemyLoader, LoadResult, ModuleCatalog,
    ModuleLoader, PilotLoader,
};
