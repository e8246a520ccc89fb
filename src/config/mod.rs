use crate::models::{IconConfig, MAX_ICON_SIZE};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;

/// Name of the optional configuration file inside the tools directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration manager for the optional `tools/config.json` file.
///
/// Loading never fails on bad content: a missing or malformed file yields
/// [`IconConfig::default`]. The tools directory is never created, so runs that
/// abort early leave the project untouched.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    tools_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager over the specified tools directory.
    ///
    /// # Arguments
    /// * `tools_dir` - Directory that may contain `config.json` (e.g., `<project>/tools`)
    pub fn new<P: AsRef<Utf8Path>>(tools_dir: P) -> Self {
        let tools_dir = tools_dir.as_ref().to_path_buf();

        Self {
            config_path: tools_dir.join(CONFIG_FILE_NAME),
            tools_dir,
        }
    }

    /// Load the icon configuration.
    ///
    /// # Returns
    /// The parsed IconConfig, or defaults if the file is missing, is not valid JSON,
    /// or lists a size outside `1..=MAX_ICON_SIZE`
    ///
    /// # Errors
    /// Only when the file exists but cannot be read
    pub fn load_icon_config(&self) -> Result<IconConfig> {
        let file_contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "Config file not found at {}, using defaults",
                    self.config_path
                );
                return Ok(IconConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config: {}", self.config_path));
            }
        };

        let config = match serde_json::from_str::<IconConfig>(&file_contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Invalid JSON in {}, using defaults ({})",
                    self.config_path,
                    e
                );
                return Ok(IconConfig::default());
            }
        };

        if let Some(size) = config.invalid_size() {
            tracing::warn!(
                "Invalid icon size {} in {} (must be 1..={}), using defaults",
                size,
                self.config_path,
                MAX_ICON_SIZE
            );
            return Ok(IconConfig::default());
        }

        tracing::info!(
            "Loaded config from {}: sizes={:?}, retina={}",
            self.config_path,
            config.icon_sizes,
            config.generate_retina
        );
        Ok(config)
    }

    /// Get the tools directory path.
    pub fn tools_dir(&self) -> &Utf8Path {
        &self.tools_dir
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
