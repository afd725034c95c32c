use std::env;
use std::time::Duration;

use crate::domain::trakt::TraktSettings;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    // HTTP transport
    pub http_timeout_secs: u64,
    pub http_user_agent: String,
    // Trakt account
    pub trakt_access_token: Option<String>,
    pub trakt_refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            log_format: match var("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()).as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            http_timeout_secs: var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|e| AppError::Config(format!("HTTP_TIMEOUT_SECS: {}", e)))?,
            http_user_agent: var("HTTP_USER_AGENT").unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
            trakt_access_token: non_blank("TRAKT_ACCESS_TOKEN"),
            trakt_refresh_token: non_blank("TRAKT_REFRESH_TOKEN"),
        };

        if config.http_timeout_secs == 0 {
            return Err(AppError::Config(
                "HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Account settings assembled from the configured tokens
    pub fn trakt_settings(&self) -> TraktSettings {
        TraktSettings {
            access_token: self.trakt_access_token.clone().unwrap_or_default(),
            refresh_token: self.trakt_refresh_token.clone().unwrap_or_default(),
            ..TraktSettings::default()
        }
    }
}
