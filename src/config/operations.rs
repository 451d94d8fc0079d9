//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, TabimapError};
use std::path::Path;

/// Config file name looked up in the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tabimap.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TabimapError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config for a command invocation.
    ///
    /// An explicitly passed config path must exist and parse. Without one,
    /// `tabimap.yaml` in the working directory is used if present; otherwise
    /// defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TabimapError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| TabimapError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `input` and `output` must be non-empty
    /// - `input` and `output` must differ (the build overwrites `output`)
    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(TabimapError::Config(
                "config validation failed: input must not be empty".to_string(),
            ));
        }

        if self.output.is_empty() {
            return Err(TabimapError::Config(
                "config validation failed: output must not be empty".to_string(),
            ));
        }

        if self.input == self.output {
            return Err(TabimapError::Config(format!(
                "config validation failed: input and output must differ (both are '{}')",
                self.input
            )));
        }

        Ok(())
    }
}
