//! File-based PilotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use combat_core::PilotRecord;

use super::{PilotRepository, RepositoryError, Result};

/// File-based implementation of PilotRepository.
///
/// Each pilot is stored as `pilot_{id}.json`. Writes go to a temp file that
/// is renamed over the target, so a crash never leaves a half-written record.
pub struct FilePilotRepository {
    base_dir: PathBuf,
}

impl FilePilotRepository {
    /// Create a new file-based pilot repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Platform data directory for save files.
    ///
    /// - Linux: `~/.local/share/skirmish/pilots`
    /// - macOS: `~/Library/Application Support/skirmish/pilots`
    /// - Fallback: `./save_data/pilots`
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "skirmish")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
            .join("pilots")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn pilot_path(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidId(id.to_owned()));
        }
        Ok(self.base_dir.join(format!("pilot_{id}.json")))
    }
}

impl PilotRepository for FilePilotRepository {
    fn save(&self, id: &str, pilot: &PilotRecord) -> Result<()> {
        let path = self.pilot_path(id)?;
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(pilot)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved pilot[{}] to {}", id, path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<PilotRecord>> {
        let path = self.pilot_path(id)?;
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let pilot = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded pilot[{}] from {}", id, path.display());
        Ok(Some(pilot))
    }

    fn exists(&self, id: &str) -> bool {
        self.pilot_path(id).map(|path| path.exists()).unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.pilot_path(id)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted pilot[{}]", id);
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("pilot_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                ids.push(id.to_owned());
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_survive_a_new_repository_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut pilot = PilotRecord::starter("ShiroWalker");
        pilot.credits = 1337;

        FilePilotRepository::new(dir.path())
            .unwrap()
            .save("shiro", &pilot)
            .unwrap();

        let reopened = FilePilotRepository::new(dir.path()).unwrap();
        assert_eq!(reopened.load("shiro").unwrap(), Some(pilot));
        assert_eq!(reopened.list_ids().unwrap(), vec!["shiro".to_owned()]);
        assert!(!dir.path().join("pilot_shiro.json.tmp").exists());
    }

    #[test]
    fn missing_pilot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePilotRepository::new(dir.path()).unwrap();
        assert_eq!(repo.load("nobody").unwrap(), None);
        repo.delete("nobody").unwrap();
    }

    #[test]
    fn path_like_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePilotRepository::new(dir.path()).unwrap();
        let pilot = PilotRecord::starter("x");

        assert!(matches!(
            repo.save("../escape", &pilot),
            Err(RepositoryError::InvalidId(_))
        ));
        assert!(!repo.exists("../escape"));
    }
}
