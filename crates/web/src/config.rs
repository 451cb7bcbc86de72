use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_keys: String,
    /// JSON file with medal and points rules; built-in rules when unset.
    pub scoring_config: Option<String>,
    /// Meet data is loaded from here on start and written back on shutdown.
    pub snapshot_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            scoring_config: std::env::var("SCORING_CONFIG").ok(),
            snapshot_path: std::env::var("SNAPSHOT_PATH").ok(),
        })
    }
}
