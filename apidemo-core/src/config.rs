use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{client::parse_endpoint, error::ApiError};

pub const DEFAULT_FAKE_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TICKERS_URL: &str = "https://api.coinpaprika.com/v1/tickers";
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URLs of the remote APIs.
///
/// Example TOML:
/// [endpoints]
/// fake_api = "https://jsonplaceholder.typicode.com"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Users, posts and todos live under this root.
    pub fake_api: String,
    /// Coin id is appended as a path segment.
    pub tickers: String,
    pub geocoding: String,
    pub forecast: String,
}

impl Endpoints {
    /// Check every base URL parses and can carry a path.
    pub fn validate(&self) -> Result<(), ApiError> {
        for raw in [&self.fake_api, &self.tickers, &self.geocoding, &self.forecast] {
            parse_endpoint(raw)?;
        }
        Ok(())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fake_api: DEFAULT_FAKE_API_URL.to_string(),
            tickers: DEFAULT_TICKERS_URL.to_string(),
            geocoding: DEFAULT_GEOCODING_URL.to_string(),
            forecast: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,

    /// Per-request timeout handed to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoints: Endpoints::default(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load config from `path`, or defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: nothing on disk, fall back to the public endpoints.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Write config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "apidemo", "apidemo")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
