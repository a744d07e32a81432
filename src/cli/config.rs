//! Configuration file location and persisted matcher settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cache::lru::DEFAULT_CAPACITY;
use crate::matcher::{ScanOptions, ScrambledMatcher};
use crate::validation::Constraints;

/// Get the configuration directory for scrambled-matcher
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("scrambled-matcher"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Settings stored in the config file
///
/// Every field falls back to its default when missing from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Dictionary and input file bounds
    pub constraints: Constraints,
    /// Signature cache capacity (0 disables the cache)
    pub cache_capacity: usize,
    /// Stop scanning once every entry was found
    pub early_exit: bool,
    /// Add dictionary words from a thread pool
    pub parallel_import: bool,
}

impl MatcherConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path, creating parent directories
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path(custom_path)?;
        validate_config_path(&path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        cache_capacity: Option<usize>,
        early_exit: Option<bool>,
        parallel_import: Option<bool>,
    ) -> Self {
        Self {
            constraints: self.constraints,
            cache_capacity: cache_capacity.unwrap_or(self.cache_capacity),
            early_exit: early_exit.unwrap_or(self.early_exit),
            parallel_import: parallel_import.unwrap_or(self.parallel_import),
        }
    }

    /// Scan options derived from these settings
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            early_exit: self.early_exit,
        }
    }

    /// An empty matcher configured from these settings
    pub fn matcher(&self) -> ScrambledMatcher {
        ScrambledMatcher::with_cache_capacity(self.cache_capacity).with_options(self.scan_options())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            constraints: Constraints::default(),
            cache_capacity: DEFAULT_CAPACITY,
            early_exit: true,
            parallel_import: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: MatcherConfig = serde_json::from_str(r#"{ "early_exit": false }"#).unwrap();
        assert!(!config.early_exit);
        assert_eq!(config.cache_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.constraints, Constraints::default());
    }

    #[test]
    fn test_merge_prefers_cli() {
        let base = MatcherConfig::default();
        let merged = base.merge_with_cli(Some(0), Some(false), None);
        assert_eq!(merged.cache_capacity, 0);
        assert!(!merged.early_exit);
        assert!(!merged.parallel_import);

        let untouched = base.merge_with_cli(None, None, None);
        assert_eq!(untouched, base);
    }

    #[test]
    fn test_config_path_extension() {
        assert!(validate_config_path(Path::new("config.json")).is_ok());
        assert!(validate_config_path(Path::new("config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_matcher_uses_settings() {
        let config = MatcherConfig {
            early_exit: false,
            ..MatcherConfig::default()
        };
        assert!(!config.matcher().options().early_exit);
    }
}
