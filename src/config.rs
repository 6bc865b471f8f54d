use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub youtrack: Option<YouTrackConfig>,
}

/// Credentials for a YouTrack instance. Either `url` (full base URL) or
/// `domain` (expanded to `https://{domain}.youtrack.cloud`) must be set;
/// `url` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct YouTrackConfig {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub token: String,
}

impl YouTrackConfig {
    pub fn base_url(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        if let Some(domain) = &self.domain {
            return Ok(format!("https://{domain}.youtrack.cloud"));
        }
        anyhow::bail!("YouTrack config needs either 'url' or 'domain'");
    }
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ytconnect")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &PathBuf) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}
