//! TUI configuration persistence
//!
//! Saves and loads form preferences such as the starting segment count,
//! input rule and submit delay. Changes made on the form are written back
//! through [`ConfigStore`].

use std::fs;
use std::path::{Path, PathBuf};

use pincode_core::{InputRule, DEFAULT_SEGMENTS, DEFAULT_SUBMIT_DELAY_MS, MAX_SEGMENTS, MIN_SEGMENTS};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "pincode-form";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Number of segment boxes on start
    #[serde(default = "default_count")]
    pub default_count: u32,

    /// Input rule selected on start
    #[serde(default)]
    pub default_rule: InputRule,

    /// Start with values masked
    #[serde(default)]
    pub hidden: bool,

    /// Simulated submit delay
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_count() -> u32 {
    DEFAULT_SEGMENTS as u32
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            default_rule: InputRule::default(),
            hidden: false,
            submit_delay_ms: default_submit_delay_ms(),
            high_contrast: false,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let config = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        };

        config.clamped()
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Pull `default_count` into the accepted segment range
    pub fn clamped(mut self) -> Self {
        let count = self.default_count.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        if count != self.default_count {
            tracing::warn!(
                "default_count {} out of range, using {}",
                self.default_count,
                count
            );
            self.default_count = count;
        }
        self
    }
}

/// Config file that form preference changes are saved to.
///
/// Holds the file's own contents, so command-line overrides are never
/// written back.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: TuiConfig,
}

impl ConfigStore {
    /// Wrap `config`, saving changes to `path`
    pub fn new(path: PathBuf, config: TuiConfig) -> Self {
        Self { path, config }
    }

    /// Load the file at `path`, or at the default location when `None`
    pub fn open(path: Option<PathBuf>) -> Option<Self> {
        let path = path.or_else(TuiConfig::config_file_path)?;
        let config = TuiConfig::load_from(&path);
        Some(Self::new(path, config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Update the starting segment count and save
    pub fn set_default_count(&mut self, count: u32) -> Result<(), ConfigError> {
        self.config.default_count = count;
        self.save()
    }

    /// Update the starting input rule and save
    pub fn set_default_rule(&mut self, rule: InputRule) -> Result<(), ConfigError> {
        self.config.default_rule = rule;
        self.save()
    }

    /// Update the starting mask state and save
    pub fn set_hidden(&mut self, hidden: bool) -> Result<(), ConfigError> {
        self.config.hidden = hidden;
        self.save()
    }

    fn save(&self) -> Result<(), ConfigError> {
        self.config.save_to(&self.path)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.default_count, 5);
        assert_eq!(config.default_rule, InputRule::OnlyNumber);
        assert!(!config.hidden);
        assert_eq!(config.submit_delay_ms, 1000);
        assert!(!config.high_contrast);
    }

    #[test]
    fn test_config_serialization() {
        let config = TuiConfig {
            default_count: 8,
            default_rule: InputRule::All,
            hidden: true,
            submit_delay_ms: 250,
            high_contrast: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"ALL\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.default_count, 8);
        assert_eq!(parsed.default_rule, InputRule::All);
        assert!(parsed.hidden);
        assert_eq!(parsed.submit_delay_ms, 250);
        assert!(parsed.high_contrast);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"hidden": true}"#).unwrap();
        assert_eq!(parsed.default_count, 5);
        assert_eq!(parsed.submit_delay_ms, 1000);
        assert!(parsed.hidden);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = TuiConfig {
            default_count: 12,
            ..TuiConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path);
        assert_eq!(loaded.default_count, 12);
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let loaded = TuiConfig::load_from(&path);
        assert_eq!(loaded.default_count, 5);
    }

    #[test]
    fn test_count_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"default_count": 500}"#).unwrap();

        assert_eq!(TuiConfig::load_from(&path).default_count, 200);
    }

    #[test]
    fn test_store_setters_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"submit_delay_ms": 250}"#).unwrap();

        let mut store = ConfigStore::open(Some(path.clone())).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.config().submit_delay_ms, 250);

        store.set_default_count(9).unwrap();
        store.set_default_rule(InputRule::All).unwrap();
        store.set_hidden(true).unwrap();

        let loaded = TuiConfig::load_from(&path);
        assert_eq!(loaded.default_count, 9);
        assert_eq!(loaded.default_rule, InputRule::All);
        assert!(loaded.hidden);
        assert_eq!(loaded.submit_delay_ms, 250);
    }

    #[test]
    fn test_store_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let mut store = ConfigStore::new(blocker.join(CONFIG_FILE_NAME), TuiConfig::default());
        assert!(matches!(store.set_hidden(true), Err(ConfigError::Io(_))));
    }
}
