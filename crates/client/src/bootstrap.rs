//! Builds the runtime collaborators from configuration.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use combat_content::{ContentFactory, starter_pilot};
use combat_core::{CombatConfig, PilotRecord};
use combat_runtime::{
    EnemyOracleImpl, FilePilotRepository, ModuleOracleImpl, OracleManager, PilotRepository,
};

/// Static content for one client run.
pub struct Content {
    pub combat: CombatConfig,
    pub oracles: OracleManager,
    /// Record handed to pilots the store has never seen.
    pub starter: PilotRecord,
}

/// Loads content from `data_dir`.
///
/// A missing directory falls back to the built-in catalog. A directory that
/// exists but holds malformed files is an error.
pub fn load_content(data_dir: &Path) -> Result<Content> {
    if !data_dir.is_dir() {
        tracing::warn!(
            "Content directory {} not found, using built-in content",
            data_dir.display()
        );
        return Ok(Content {
            combat: CombatConfig::default(),
            oracles: OracleManager::builtin(),
            starter: starter_pilot(),
        });
    }

    let factory = ContentFactory::new(data_dir);
    let combat = factory.load_config()?;
    let modules = factory.load_modules()?;
    let enemies = factory.load_enemies()?;
    let starter = factory.load_pilot()?;

    tracing::info!(
        modules = modules.len(),
        enemies = enemies.len(),
        "Loaded content from {}",
        data_dir.display()
    );

    Ok(Content {
        combat,
        oracles: OracleManager::new(
            Arc::new(ModuleOracleImpl::from_definitions(modules)),
            Arc::new(EnemyOracleImpl::from_templates(enemies)),
        ),
        starter,
    })
}

/// Opens the player store and makes sure `pilot_id` exists in it.
pub fn open_store(
    save_dir: &Path,
    pilot_id: &str,
    starter: &PilotRecord,
) -> Result<Arc<dyn PilotRepository>> {
    let store = FilePilotRepository::new(save_dir)
        .with_context(|| format!("Failed to open player store at {}", save_dir.display()))?;

    if !store.exists(pilot_id) {
        store.save(pilot_id, starter)?;
        tracing::info!(pilot_id, "Created new pilot '{}'", starter.name);
    }

    Ok(Arc::new(store))
}
