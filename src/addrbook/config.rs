use crate::error::{AddrBookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for addrbook, stored as `config.json` in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrBookConfig {
    /// Data file path; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for AddrBookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl AddrBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AddrBookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddrBookError::Io)?;
        Ok(())
    }

    pub fn set_data_file(&mut self, path: &str) -> Result<()> {
        if path.trim().is_empty() {
            return Err(AddrBookError::Config("data-file cannot be empty".into()));
        }
        self.data_file = PathBuf::from(path);
        Ok(())
    }

    /// The data file as an absolute path under `cwd` when configured relative.
    pub fn resolve_data_file(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AddrBookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("addressbook.txt"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = AddrBookConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, AddrBookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("addrbook");

        let mut config = AddrBookConfig::default();
        config.set_data_file("contacts/people.txt").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = AddrBookConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("contacts/people.txt"));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        let loaded = AddrBookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, AddrBookConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            AddrBookConfig::load(dir.path()),
            Err(AddrBookError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_empty_data_file_is_rejected() {
        let mut config = AddrBookConfig::default();
        assert!(config.set_data_file("  ").is_err());
        assert_eq!(config, AddrBookConfig::default());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let cwd = Path::new("/work");
        let config = AddrBookConfig::default();
        assert_eq!(
            config.resolve_data_file(cwd),
            PathBuf::from("/work/addressbook.txt")
        );

        let absolute = AddrBookConfig {
            data_file: PathBuf::from("/data/book.txt"),
        };
        assert_eq!(
            absolute.resolve_data_file(cwd),
            PathBuf::from("/data/book.txt")
        );
    }
}
