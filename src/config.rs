use crate::model::locale::Locale;
use crate::model::profile::ProfileKind;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_COUNT: usize = 50;
/// Largest fleet the dashboard will generate
pub const MAX_COUNT: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: u64,
    pub count: usize,
    pub profile: ProfileKind,
    pub locale: Locale,
    /// Column keys for the fleet table and export, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_columns: Option<Vec<String>>,
    /// Where CSV reports are written; the working directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_COUNT,
            profile: ProfileKind::default(),
            locale: Locale::default(),
            table_columns: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".fleet-command"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_dir() -> PathBuf {
        Self::config_dir()
            .map(|dir| dir.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Load the user config, falling back to defaults
    ///
    /// A missing file is normal; an unreadable one is logged and ignored.
    pub fn load() -> Config {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if config.count > MAX_COUNT {
            warn!(count = config.count, max = MAX_COUNT, "config count too large, capping");
            config.count = MAX_COUNT;
        }
        Ok(Some(config))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("config.json")).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "locale": "ar", "profile": "extended" }"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.profile, ProfileKind::Extended);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.count, DEFAULT_COUNT);
        assert!(config.table_columns.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            seed: 7,
            count: 120,
            table_columns: Some(vec!["id".to_string(), "status".to_string()]),
            export_dir: Some(PathBuf::from("/tmp/reports")),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_oversized_count_is_capped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, format!(r#"{{ "count": {} }}"#, usize::MAX)).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.count, MAX_COUNT);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ seed: ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
