//! Module catalog loader.

use std::path::Path;

use combat_core::ModuleDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Module catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCatalog {
    pub modules: Vec<ModuleDefinition>,
}

/// Loader for the module catalog from RON files.
pub struct ModuleLoader;

impl ModuleLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ModuleDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ModuleDefinition>> {
        let catalog: ModuleCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse module catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for definition in &catalog.modules {
            if !seen.insert(definition.id.as_str()) {
                anyhow::bail!("Duplicate module id '{}' in catalog", definition.id);
            }
        }

        Ok(catalog.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{DamageType, ModuleKind, Multiplier, RollRange, UtilityEffect};

    #[test]
    fn parses_every_module_kind() {
        let modules = ModuleLoader::parse(
            r#"(
                modules: [
                    (
                        id: "Mass Driver",
                        kind: Weapon((damage_type: kinetic, damage: (min: 8, max: 16), ammo_cost: 2, power_cost: 5)),
                    ),
                    (id: "Advanced Drill", kind: Mining(power_cost: 8, efficiency: 1.4)),
                    (id: "Cargo Pod", kind: Utility(CargoBonus(25)), description: "More room."),
                    (id: "Scanner Array", kind: Special),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(modules.len(), 4);
        let driver = modules[0].kind.weapon().unwrap();
        assert_eq!(driver.damage_type, DamageType::Kinetic);
        assert_eq!(driver.damage, RollRange::new(8, 16));
        assert_eq!(driver.ammo_cost, 2);
        assert_eq!(
            modules[1].kind,
            ModuleKind::Mining {
                power_cost: 8,
                efficiency: Multiplier::from_hundredths(140)
            }
        );
        assert_eq!(modules[2].kind.utility(), Some(UtilityEffect::CargoBonus(25)));
        assert_eq!(modules[2].description, "More room.");
        assert_eq!(modules[3].kind, ModuleKind::Special);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = ModuleLoader::parse(
            r#"(modules: [(id: "Cargo Pod", kind: Special), (id: "Cargo Pod", kind: Special)])"#,
        );
        assert!(result.is_err());
    }
}
