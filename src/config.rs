//! Configuration module for tagset
//!
//! Holds the provider-level tag settings: default tags merged into every
//! resource and the keys or key prefixes to ignore when reading tags back.
//! Configuration is stored as TOML in the user's config directory
//! (`~/.config/tagset/config.toml` on Linux).
//!
//! ```toml
//! quiet = false
//!
//! [default_tags]
//! owner = "platform"
//! cost_center = "1234"
//!
//! [ignore_tags]
//! keys = ["last_scanned"]
//! key_prefixes = ["kubernetes.io/"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::tags::{DefaultConfig, IgnoreConfig, TagSet};

/// Keys and key prefixes whose tags are left out of comparisons
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct IgnoreTagsConfig {
    /// Exact tag keys to ignore
    #[serde(default)]
    pub keys: Vec<String>,

    /// Tag key prefixes to ignore
    #[serde(default)]
    pub key_prefixes: Vec<String>,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TagsetConfig {
    /// Tags applied to every resource unless overridden
    #[serde(default)]
    pub default_tags: BTreeMap<String, String>,

    /// Tags to ignore when comparing
    #[serde(default)]
    pub ignore_tags: IgnoreTagsConfig,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl TagsetConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tagset").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// `TAGSET_`-prefixed environment variables override scalar settings,
    /// e.g. `TAGSET_QUIET=true`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading tag configuration");

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("TAGSET").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the string is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Default tags as a `DefaultConfig`
    ///
    /// No configured default tags means no defaults at all, rather than an
    /// empty set of defaults.
    #[must_use]
    pub fn default_config(&self) -> DefaultConfig {
        if self.default_tags.is_empty() {
            return DefaultConfig::default();
        }
        DefaultConfig::new(TagSet::from_values(self.default_tags.clone()))
    }

    /// Ignore rules as an `IgnoreConfig`, or `None` if nothing is ignored
    #[must_use]
    pub fn ignore_config(&self) -> Option<IgnoreConfig> {
        let config = IgnoreConfig::new(
            self.ignore_tags.keys.iter().cloned(),
            self.ignore_tags.key_prefixes.iter().cloned(),
        );
        (!config.is_empty()).then_some(config)
    }
}
