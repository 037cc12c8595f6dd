use serde::Deserialize;
use url::Url;

use crate::domain::UserId;

/// Runtime configuration, read from `CHALLENGES_*` environment variables
/// (optionally seeded from a `.env` file).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub request_timeout_secs: u64,
    pub offline: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing required setting CHALLENGES_{0}")]
    Missing(&'static str),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Settings needed to reach the hosted REST backend
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub base_url: Url,
    pub api_key: String,
    pub access_token: Option<String>,
    pub user_id: UserId,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let config = config::Config::builder()
            .set_default("request_timeout_secs", 10_i64)?
            .set_default("offline", false)?
            .add_source(config::Environment::with_prefix("CHALLENGES").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn remote(&self) -> Result<RemoteSettings, ConfigError> {
        let base_url = required(&self.base_url, "BASE_URL")?;
        let api_key = required(&self.api_key, "API_KEY")?;
        let user_id = UserId::new(required(&self.user_id, "USER_ID")?)
            .map_err(|_| ConfigError::Missing("USER_ID"))?;

        // a trailing slash keeps `Url::join` from dropping the last path segment
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

        Ok(RemoteSettings {
            base_url,
            api_key: api_key.to_string(),
            access_token: self.access_token.clone().filter(|t| !t.trim().is_empty()),
            user_id,
            request_timeout_secs: self.request_timeout_secs,
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}
