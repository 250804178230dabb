//! Starter pilot loader.

use std::path::Path;

use combat_core::PilotRecord;

use crate::loaders::{LoadResult, read_file};

/// Loader for the pilot record new players start with.
pub struct PilotLoader;

impl PilotLoader {
    pub fn load(path: &Path) -> LoadResult<PilotRecord> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PilotRecord> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse pilot RON: {}", e))
    }
}
