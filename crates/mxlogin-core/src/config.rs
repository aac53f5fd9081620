//! Configuration management for mxlogin.
//!
//! Loads configuration from ${MXLOGIN_HOME}/config.toml with sensible
//! defaults. The only setting is the login endpoint; the default reproduces
//! the Maximo OSLC work-order URL the app has always posted to.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default login endpoint: Maximo OSLC work-order query.
///
/// Plain HTTP, as deployed. The `endpoint` config key or the
/// `MXLOGIN_ENDPOINT` env var can point this at a TLS endpoint instead.
pub const DEFAULT_ENDPOINT: &str = "http://maxgps.smartech-tn.com:9876/maximo/oslc/os/mxwo?lean=1&oslc.select=wonum,description,assetnum,location,status&oslc.pageSize=10";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the login POST is sent to.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// Resolution order for the endpoint:
    /// 1. `MXLOGIN_ENDPOINT` environment variable
    /// 2. `endpoint` in ${MXLOGIN_HOME}/config.toml
    /// 3. [`DEFAULT_ENDPOINT`]
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        if let Ok(endpoint) = std::env::var("MXLOGIN_ENDPOINT") {
            let trimmed = endpoint.trim();
            if !trimmed.is_empty() {
                config.endpoint = trimmed.to_string();
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Validates that the configured endpoint is a well-formed URL.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid login endpoint URL: {}", self.endpoint))?;
        Ok(())
    }
}

pub mod paths {
    //! Path resolution for mxlogin configuration and data directories.
    //!
    //! MXLOGIN_HOME resolution order:
    //! 1. MXLOGIN_HOME environment variable (if set)
    //! 2. ~/.config/mxlogin (default)

    use std::path::PathBuf;

    /// Returns the mxlogin home directory.
    pub fn mxlogin_home() -> PathBuf {
        if let Ok(home) = std::env::var("MXLOGIN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("mxlogin"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mxlogin_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        mxlogin_home().join("logs")
    }
}
