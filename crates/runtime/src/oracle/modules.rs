//! [`combat_core::ModuleOracle`] backed by an in-memory map.
use std::collections::HashMap;

use combat_core::{ModuleDefinition, ModuleId, ModuleOracle};

/// Module registry with static definitions.
pub struct ModuleOracleImpl {
    definitions: HashMap<ModuleId, ModuleDefinition>,
}

impl ModuleOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ModuleDefinition>) -> Self {
        let mut oracle = Self::new();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add a module definition, replacing any with the same id.
    pub fn add_definition(&mut self, def: ModuleDefinition) {
        self.definitions.insert(def.id.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ModuleOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleOracle for ModuleOracleImpl {
    fn module(&self, id: &ModuleId) -> Option<ModuleDefinition> {
        self.definitions.get(id).cloned()
    }

    fn all_modules(&self) -> Vec<ModuleDefinition> {
        let mut modules: Vec<_> = self.definitions.values().cloned().collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));
        modules
    }
}
