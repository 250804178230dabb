//! Enemy template loader.

use std::path::Path;

use combat_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for enemy in &catalog.enemies {
            if enemy.damage.min > enemy.damage.max {
                anyhow::bail!(
                    "Enemy '{}' has an inverted damage range {}",
                    enemy.id,
                    enemy.damage
                );
            }
        }

        Ok(catalog.enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{DamageType, Multiplier};

    #[test]
    fn parses_weakness_map() {
        let enemies = EnemyLoader::parse(
            r#"(
                enemies: [
                    (
                        id: "drone",
                        name: "Patrol Drone",
                        hull: 40,
                        weakness: { energy: 1.5, kinetic: 0.75 },
                        damage: (min: 3, max: 6),
                    ),
                ],
            )"#,
        )
        .unwrap();

        let drone = &enemies[0];
        assert_eq!(drone.shields, 0);
        assert_eq!(
            drone.weakness.multiplier(DamageType::Energy),
            Multiplier::from_hundredths(150)
        );
        assert_eq!(
            drone.weakness.multiplier(DamageType::Blast),
            Multiplier::NEUTRAL
        );
    }

    #[test]
    fn rejects_inverted_damage_range() {
        let result = EnemyLoader::parse(
            r#"(enemies: [(id: "x", name: "X", hull: 1, damage: (min: 9, max: 2))])"#,
        );
        assert!(result.is_err());
    }
}
