use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::chain::{NetworkDescriptor, NetworkRegistry};
use crate::error::Error;
use crate::logging::LoggingConfig;
use crate::status::StatusPalette;

/// Display configuration for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Networks shown in addition to the built-in table
    pub networks: Vec<NetworkDescriptor>,
    /// Status colors
    pub palette: StatusPalette,
    /// Logging settings for binaries
    pub logging: LoggingConfig,
}

impl DisplayConfig {
    /// Load configuration from a TOML file, then apply `BADNODE_` environment overrides
    /// (e.g. `BADNODE_PALETTE__SYNCING=#00FF00`). `BADNODE_LOG_*` variables take
    /// precedence over the `[logging]` section.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let settings = ConfigLoader::builder()
            .add_source(File::with_name(&path.to_string_lossy()))
            .add_source(
                Environment::with_prefix("BADNODE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut config: DisplayConfig = settings.try_deserialize()?;
        config.logging.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load from [`DisplayConfig::default_path`]. Without a config file, defaults are
    /// used and logging is read from `BADNODE_LOG_*` variables.
    pub fn load_or_default() -> Result<Self, Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self {
                logging: LoggingConfig::from_env(),
                ..Self::default()
            })
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: DisplayConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = match env::var("BADNODE_CONFIG_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
                path.push("badnode");
                path
            }
        };
        path.push("display.toml");
        path
    }

    /// Check palette colors and network ID uniqueness
    pub fn validate(&self) -> Result<(), Error> {
        self.palette.validate()?;
        NetworkRegistry::from_config(self)?;
        Ok(())
    }

    /// Network registry described by this configuration
    pub fn registry(&self) -> Result<NetworkRegistry, Error> {
        NetworkRegistry::from_config(self)
    }
}
