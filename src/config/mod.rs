//! Configuration module for markr
//!
//! Settings are layered, lowest precedence first: built-in defaults, the
//! TOML file in the user's config directory, then `MARKR_*` environment
//! variables. Command line flags are applied on top by the caller.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MarkrConfig {
    /// Location of the JSON bookmark file
    pub bookmark_file: PathBuf,

    /// Commit the bookmark file after every change when it lives in a git work tree
    #[serde(default)]
    pub auto_commit: bool,

    /// Reject libraries in which two bookmarks share a URL
    #[serde(default = "default_unique_urls")]
    pub unique_urls: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Editor used when neither `$VISUAL` nor `$EDITOR` is set
    #[serde(default)]
    pub editor: Option<String>,
}

const fn default_unique_urls() -> bool {
    true
}

/// Default location of the bookmark file: `<data dir>/markr/bookmarks.json`
#[must_use]
pub fn default_bookmark_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("markr")
        .join("bookmarks.json")
}

impl Default for MarkrConfig {
    fn default() -> Self {
        Self {
            bookmark_file: default_bookmark_file(),
            auto_commit: true,
            unique_urls: default_unique_urls(),
            quiet: false,
            editor: None,
        }
    }
}

impl MarkrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("markr").join("config.toml"))
    }

    /// Load configuration from the user's config file and environment
    ///
    /// A missing config file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be parsed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration layered over the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layers(path, Environment::with_prefix("MARKR"))
    }

    fn load_layers(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("bookmark_file", defaults.bookmark_file.to_string_lossy().into_owned())?
            .set_default("auto_commit", defaults.auto_commit)?
            .set_default("unique_urls", defaults.unique_urls)?
            .set_default("quiet", defaults.quiet)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// The configuration rendered as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Apply command line overrides
    #[must_use]
    pub fn with_overrides(mut self, bookmark_file: Option<PathBuf>, quiet: bool) -> Self {
        if let Some(path) = bookmark_file {
            self.bookmark_file = path;
        }
        self.quiet |= quiet;
        self
    }
}
