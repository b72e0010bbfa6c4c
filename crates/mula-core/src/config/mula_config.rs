//! Top-level MulaBoard configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, EligibilityConfig, ObservabilityConfig, RetentionConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MULA_*`)
/// 2. Config file passed to [`MulaConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MulaConfig {
    pub storage: StorageConfig,
    pub eligibility: EligibilityConfig,
    pub retention: RetentionConfig,
    pub observability: ObservabilityConfig,
}

impl MulaConfig {
    /// Load configuration from a TOML file, apply environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: MulaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: MulaConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MULA_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get("MULA_DB_PATH") {
            self.storage.db_path = path;
        }
        if let Some(salt) = get("MULA_IP_HASH_SALT") {
            self.eligibility.ip_hash_salt = salt;
        }
        if let Some(level) = get("MULA_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.eligibility;
        let positive = [
            ("eligibility.ip_limit", e.ip_limit as u64),
            ("eligibility.ip_window_secs", e.ip_window_secs),
            ("eligibility.fingerprint_limit", e.fingerprint_limit as u64),
            ("eligibility.fingerprint_window_secs", e.fingerprint_window_secs),
            (
                "retention.attempt_retention_days",
                self.retention.attempt_retention_days as u64,
            ),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        let bounded = [
            (
                "eligibility.ip_window_secs",
                e.ip_window_secs,
                defaults::MAX_RATE_WINDOW_SECS,
            ),
            (
                "eligibility.fingerprint_window_secs",
                e.fingerprint_window_secs,
                defaults::MAX_RATE_WINDOW_SECS,
            ),
            (
                "eligibility.min_fill_secs",
                e.min_fill_secs,
                defaults::MAX_MIN_FILL_SECS,
            ),
            (
                "retention.attempt_retention_days",
                u64::from(self.retention.attempt_retention_days),
                u64::from(defaults::MAX_ATTEMPT_RETENTION_DAYS),
            ),
        ];
        for (field, value, max) in bounded {
            if value > max {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be at most {max}"),
                });
            }
        }
        if e.ip_hash_salt.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "eligibility.ip_hash_salt".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
