use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pinboard.in/v1";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// User-agent string sent with Pinboard requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base URL of the Pinboard v1 API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("pinku/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/pinku/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}
