//! Runtime configuration
//!
//! Layers, lowest to highest precedence:
//! 1. built-in defaults
//! 2. TOML file (`--config`, else `assetreg.toml` in the working directory)
//! 3. `.env` file and process environment (`ASSETREG_*`)
//! 4. command-line flags

use assetreg_core::logging_facility::Profile;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "assetreg.toml";

pub const ENV_ROSTER: &str = "ASSETREG_ROSTER";
pub const ENV_ASSETS: &str = "ASSETREG_ASSETS";
pub const ENV_LOG_PROFILE: &str = "ASSETREG_LOG_PROFILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Roster file; `.xlsx`/`.xlsm` selects the spreadsheet format
    pub roster: PathBuf,
    /// Asset feed URL or path; reports are disabled when unset
    pub assets: Option<String>,
    /// `dev` or `prod`
    pub log_profile: String,
    /// Filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub feed_timeout_secs: u64,
    /// Width of the longest bar in text charts
    pub chart_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("employees.xlsx"),
            assets: None,
            log_profile: "dev".to_string(),
            log_filter: "warn".to_string(),
            feed_timeout_secs: 30,
            chart_width: 40,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub assets: Option<String>,
    pub log_profile: Option<String>,
}

impl AppConfig {
    /// Resolve every layer for this process
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the chosen config file cannot be read or
    /// parsed, or when a value fails [`AppConfig::validate`].
    pub fn resolve(overrides: &Overrides) -> Result<Self, ConfigError> {
        // a missing .env file is normal
        let _ = dotenvy::dotenv();

        let mut config = match &overrides.config {
            Some(path) => Self::load_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot be used
    ///
    /// # Errors
    ///
    /// `InvalidValue` for an unknown log profile, a zero feed timeout or a
    /// zero chart width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile()?;
        if self.feed_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "feed_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.chart_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "chart_width".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Read a TOML config file; keys not present keep their defaults
    ///
    /// # Errors
    ///
    /// `Read` when the file cannot be opened, `Parse` on invalid TOML or
    /// unknown keys.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `ASSETREG_*` variables; blank values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(roster) = lookup(ENV_ROSTER) {
            self.roster = PathBuf::from(roster);
        }
        if let Some(assets) = lookup(ENV_ASSETS) {
            self.assets = Some(assets);
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE) {
            self.log_profile = profile;
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(roster) = &overrides.roster {
            self.roster = roster.clone();
        }
        if let Some(assets) = &overrides.assets {
            self.assets = Some(assets.clone());
        }
        if let Some(profile) = &overrides.log_profile {
            self.log_profile = profile.clone();
        }
    }

    /// Parsed logging profile
    ///
    /// # Errors
    ///
    /// `InvalidValue` when `log_profile` is not `dev` or `prod`.
    pub fn profile(&self) -> Result<Profile, ConfigError> {
        self.log_profile
            .parse()
            .map_err(|message| ConfigError::InvalidValue {
                key: "log_profile".to_string(),
                message,
            })
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }
}
