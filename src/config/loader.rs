//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::AttendanceConfig;

/// Loads and provides access to attendance configuration.
///
/// # File Format
///
/// ```yaml
/// grace_period_minutes: 15
/// late_threshold_minutes: 30
/// auto_checkout_time: "00:00"
/// noon_cutoff_time: "12:00"
/// night_shift_start_time: "18:00"
/// day_shift_end_time: "18:00"
/// early_morning_end_time: "06:00"
/// consecutive_shift_gap_minutes: 30
/// ```
///
/// Omitted keys take their defaults.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance.yaml").unwrap();
/// println!("Grace period: {} minutes", loader.config().grace_period_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or time strings ([`EngineError::ConfigParseError`])
    /// - The values violate rule invariants ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded attendance configuration");
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: AttendanceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: AttendanceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AttendanceConfig {
        self.config
    }
}
