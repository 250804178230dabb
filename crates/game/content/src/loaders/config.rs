//! Combat rule configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
///
/// Missing keys fall back to the built-in defaults, so a config file only
/// needs the values it overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Multiplier, RollRange};

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            retreat_chance = 35
            critical_multiplier = 2.0

            [emergency_power]
            success_threshold = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.retreat_chance, 35);
        assert_eq!(config.critical_multiplier, Multiplier::from_hundredths(200));
        assert_eq!(config.emergency_power.success_threshold, 12);
        assert_eq!(config.emergency_power.boost, RollRange::new(12, 30));
        assert_eq!(config.power_grid_ceiling, 140);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("retreat_chance = ").is_err());
    }
}
