//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use combat_content::DEFAULT_ENEMY_ID;
use combat_runtime::FilePilotRepository;

/// Pilot id used when `SKIRMISH_PILOT` is unset.
pub const DEFAULT_PILOT_ID: &str = "default";

/// Configuration required to bootstrap the runtime and the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `modules.ron`, `enemies.ron`, `pilot.ron`.
    pub data_dir: PathBuf,
    /// Directory of the JSON player store.
    pub save_dir: PathBuf,
    pub pilot_id: String,
    pub enemy_id: String,
    pub seed: Option<u64>,
    pub event_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            save_dir: FilePilotRepository::default_dir(),
            pilot_id: DEFAULT_PILOT_ID.to_owned(),
            enemy_id: DEFAULT_ENEMY_ID.to_owned(),
            seed: None,
            event_buffer: 100,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content data directory (default: `data`)
    /// - `SKIRMISH_SAVE_DIR` - Player store directory (default: platform-specific)
    /// - `SKIRMISH_PILOT` - Pilot id in the store (default: `default`)
    /// - `SKIRMISH_ENEMY` - Enemy template id (default: `pirate_sholen`)
    /// - `SKIRMISH_SEED` - Fixed session seed (default: random)
    /// - `SKIRMISH_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("SKIRMISH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("SKIRMISH_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(pilot) = lookup("SKIRMISH_PILOT").filter(|s| !s.trim().is_empty()) {
            config.pilot_id = pilot.trim().to_owned();
        }
        if let Some(enemy) = lookup("SKIRMISH_ENEMY").filter(|s| !s.trim().is_empty()) {
            config.enemy_id = enemy.trim().to_owned();
        }
        config.seed = parse(lookup("SKIRMISH_SEED"));
        if let Some(capacity) = parse::<usize>(lookup("SKIRMISH_EVENT_BUFFER")) {
            config.event_buffer = capacity.max(1);
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.pilot_id, DEFAULT_PILOT_ID);
        assert_eq!(config.enemy_id, DEFAULT_ENEMY_ID);
        assert_eq!(config.seed, None);
        assert_eq!(config.event_buffer, 100);
    }

    #[test]
    fn variables_override_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SKIRMISH_DATA_DIR", "/srv/content"),
            ("SKIRMISH_SAVE_DIR", "/srv/saves"),
            ("SKIRMISH_PILOT", " shiro "),
            ("SKIRMISH_SEED", "42"),
            ("SKIRMISH_EVENT_BUFFER", "0"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.save_dir, PathBuf::from("/srv/saves"));
        assert_eq!(config.pilot_id, "shiro");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.event_buffer, 1);
    }

    #[test]
    fn malformed_numbers_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SKIRMISH_SEED", "forty-two"),
            ("SKIRMISH_EVENT_BUFFER", "lots"),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.event_buffer, 100);
    }
}
