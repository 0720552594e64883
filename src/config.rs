// User configuration loaded from ~/.config/cantoctl/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration, deserialized from `~/.config/cantoctl/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Versioned API root of the venue backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Admin credential sent as the X-API-Key header.
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Read config from disk, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cantoctl")
            .join("config.toml")
    }
}
