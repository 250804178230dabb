//! Repository contracts for saving and loading pilot records.

use combat_core::PilotRecord;

use super::error::Result;

/// Player/ship store.
///
/// This is for DYNAMIC data that changes between encounters:
/// - Pilot stats, credits and ammo
/// - Ship profile and installed modules
pub trait PilotRepository: Send + Sync {
    /// Save a pilot record under `id`, replacing any previous one
    fn save(&self, id: &str, pilot: &PilotRecord) -> Result<()>;

    /// Load a pilot record by id
    fn load(&self, id: &str) -> Result<Option<PilotRecord>>;

    /// Check if a record exists
    fn exists(&self, id: &str) -> bool;

    /// Delete a record
    fn delete(&self, id: &str) -> Result<()>;

    /// List all stored pilot ids in ascending order
    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
