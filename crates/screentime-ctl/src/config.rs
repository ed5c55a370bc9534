use anyhow::{bail, Context, Result};
use screentime_common::config::{DisplayConfig, ExportConfig, GeneralConfig};
use screentime_common::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CtlConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl CtlConfig {
    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("screentime-dash")
            .join("ctl.toml")
    }

    /// Load configuration from file, creating default if it doesn't exist.
    /// A default that cannot be written is still returned.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", config_path);

        if !config_path.exists() {
            info!(
                "Configuration file not found at {:?}, creating default configuration",
                config_path
            );
            let default_config = Self::default();
            if let Err(e) = default_config.save_to_path(config_path) {
                warn!("Using default configuration without saving it: {:#}", e);
            }
            return Ok(default_config);
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: CtlConfig = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        debug!("Saving configuration to {:?}", config_path);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let config_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Saved configuration to {:?}", config_path);
        Ok(())
    }

    /// Validate the configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.general.provider == ProviderKind::Snapshot && self.general.snapshot_path.is_none() {
            bail!("general.provider is \"snapshot\" but general.snapshot_path is not set");
        }

        if !LOG_LEVELS.contains(&self.general.log_level.to_lowercase().as_str()) {
            warn!("Unknown log level {:?}, falling back to info", self.general.log_level);
        }

        if let Some(dir) = &self.export.directory {
            if !Path::new(dir).is_dir() {
                warn!("Export directory {:?} does not exist yet", dir);
            }
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Log filter directive, `info` unless the configured level is recognised
    pub fn log_level(&self) -> String {
        let level = self.general.log_level.to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            "info".to_string()
        }
    }

    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.general.snapshot_path.as_ref().map(PathBuf::from)
    }

    pub fn export_directory(&self) -> PathBuf {
        self.export.directory.as_ref().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
    }
}
