//! In-memory PilotRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use combat_core::PilotRecord;

use super::{PilotRepository, RepositoryError, Result};

/// In-memory implementation of PilotRepository.
pub struct InMemoryPilotRepo {
    pilots: RwLock<HashMap<String, PilotRecord>>,
}

impl InMemoryPilotRepo {
    pub fn new() -> Self {
        Self {
            pilots: RwLock::new(HashMap::new()),
        }
    }

    /// Create with one pilot already stored.
    pub fn with_pilot(id: impl Into<String>, pilot: PilotRecord) -> Self {
        let mut pilots = HashMap::new();
        pilots.insert(id.into(), pilot);
        Self {
            pilots: RwLock::new(pilots),
        }
    }
}

impl Default for InMemoryPilotRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PilotRepository for InMemoryPilotRepo {
    fn save(&self, id: &str, pilot: &PilotRecord) -> Result<()> {
        let mut pilots = self
            .pilots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        pilots.insert(id.to_owned(), pilot.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<PilotRecord>> {
        let pilots = self
            .pilots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(pilots.get(id).cloned())
    }

    fn exists(&self, id: &str) -> bool {
        self.pilots
            .read()
            .map(|pilots| pilots.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut pilots = self
            .pilots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        pilots.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let pilots = self
            .pilots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = pilots.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete() {
        let repo = InMemoryPilotRepo::new();
        let pilot = PilotRecord::starter("ShiroWalker");

        repo.save("shiro", &pilot).unwrap();
        assert!(repo.exists("shiro"));
        assert_eq!(repo.load("shiro").unwrap(), Some(pilot));
        assert_eq!(repo.list_ids().unwrap(), vec!["shiro".to_owned()]);

        repo.delete("shiro").unwrap();
        assert!(!repo.exists("shiro"));
        assert_eq!(repo.load("shiro").unwrap(), None);
    }
}
