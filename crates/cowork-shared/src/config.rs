//! Configuration management

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::constants::{
    DEFAULT_BACKEND_TIMEOUT_SECONDS, DEFAULT_BACKEND_URL, DEFAULT_REVALIDATE_SECONDS,
    DEFAULT_SITE_URL,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Public origin used for canonical URLs and the sitemap.
    pub site_url: String,
    pub static_dir: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            env: "development".into(),
            host: "127.0.0.1".into(),
            port: 8080,
            name: "cowork-server".into(),
            site_url: DEFAULT_SITE_URL.into(),
            static_dir: "static".into(),
        }
    }
}

/// Listing/lead backend. `base_url` may or may not end with a slash.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub revalidate_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.into(),
            revalidate_seconds: DEFAULT_REVALIDATE_SECONDS,
            timeout_seconds: DEFAULT_BACKEND_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AnalyticsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ga_id: Option<String>,
}

impl AnalyticsSettings {
    /// Configured measurement id, ignoring blank values.
    pub fn measurement_id(&self) -> Option<&str> {
        self.ga_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub filter: String,
    /// Daily rolling log files are written here when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "info".into(),
            directory: None,
        }
    }
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// `COWORK_*` environment variables (`COWORK_BACKEND__BASE_URL`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("COWORK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}
