use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger_dir")]
    pub ledger_dir: String,
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: f64,
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold_minutes: i64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ledger_dir() -> String {
    Config::config_dir()
        .join("projects")
        .to_string_lossy()
        .to_string()
}
fn default_hourly_rate() -> f64 {
    113.63
}
fn default_alert_threshold() -> i64 {
    5 * 60
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_dir: default_ledger_dir(),
            default_hourly_rate: default_hourly_rate(),
            alert_threshold_minutes: default_alert_threshold(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timeledger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeledger.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        // An empty file is a valid (all-defaults) configuration.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration to `path`, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Directory holding the `<slug>.csv` ledgers, with `~` expanded.
    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger_dir)
    }

    fn validate(&self) -> AppResult<()> {
        if self.default_hourly_rate.is_nan() || self.default_hourly_rate <= 0.0 {
            return Err(AppError::Config(format!(
                "default_hourly_rate must be greater than zero (got {})",
                self.default_hourly_rate
            )));
        }
        if self.alert_threshold_minutes <= 0 {
            return Err(AppError::Config(format!(
                "alert_threshold_minutes must be greater than zero (got {})",
                self.alert_threshold_minutes
            )));
        }
        Ok(())
    }
}
