use blockpage_editor::{EditorConfig, MAX_HISTORY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "blockpage.config.json";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("maxHistory must be at least 1")]
    ZeroHistory,

    #[error("pagesDir must not be empty")]
    EmptyPagesDir,
}

/// Blockpage configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one JSON file per page
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Undo steps kept per editing session
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// When set, new blocks get `<prefix>-N` ids instead of UUIDs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_max_history() -> usize {
    MAX_HISTORY
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            // Return default config if none exists
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::ZeroHistory);
        }
        if self.pages_dir.trim().is_empty() {
            return Err(ConfigError::EmptyPagesDir);
        }
        Ok(())
    }

    /// Get absolute path to the pages directory
    pub fn get_pages_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.pages_dir)
    }

    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            max_history: self.max_history,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            max_history: default_max_history(),
            id_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "pagesDir": "site/pages",
            "maxHistory": 20,
            "idPrefix": "block"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.pages_dir, "site/pages");
        assert_eq!(config.max_history, 20);
        assert_eq!(config.id_prefix.as_deref(), Some("block"));
        assert_eq!(config.editor_config().max_history, 20);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.max_history, MAX_HISTORY);
        assert!(config.id_prefix.is_none());
    }

    #[test]
    fn test_validation() {
        let config = Config {
            max_history: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistory));

        let config = Config {
            pages_dir: " ".to_string(),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPagesDir));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "maxHistory": 0 }"#).unwrap();
        assert!(Config::load(dir.path().to_str().unwrap()).is_err());
    }
}
