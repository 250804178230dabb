//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, EnemyTemplate, ModuleDefinition, PilotRecord};

use crate::loaders::{ConfigLoader, EnemyLoader, LoadResult, ModuleLoader, PilotLoader};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── modules.ron
/// ├── enemies.ron
/// └── pilot.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the module catalog from `modules.ron`.
    pub fn load_modules(&self) -> LoadResult<Vec<ModuleDefinition>> {
        ModuleLoader::load(&self.data_dir.join("modules.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the starter pilot from `pilot.ron`.
    pub fn load_pilot(&self) -> LoadResult<PilotRecord> {
        PilotLoader::load(&self.data_dir.join("pilot.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
