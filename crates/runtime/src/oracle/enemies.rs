//! [`combat_core::EnemyOracle`] backed by an in-memory map.
use std::collections::HashMap;

use combat_core::{EnemyOracle, EnemyTemplate};

pub struct EnemyOracleImpl {
    templates: HashMap<String, EnemyTemplate>,
}

impl EnemyOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn from_templates(templates: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        let mut oracle = Self::new();
        for template in templates {
            oracle.add_template(template);
        }
        oracle
    }

    pub fn add_template(&mut self, template: EnemyTemplate) {
        self.templates.insert(template.id.clone(), template);
    }
}

impl Default for EnemyOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyOracle for EnemyOracleImpl {
    fn template(&self, id: &str) -> Option<EnemyTemplate> {
        self.templates.get(id).cloned()
    }

    fn all_templates(&self) -> Vec<EnemyTemplate> {
        let mut templates: Vec<_> = self.templates.values().cloned().collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }
}
