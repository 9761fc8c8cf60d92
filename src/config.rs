//! Portal configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORE_URL: &str = "http://core:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// `CORE_URL` is not an absolute http(s) URL.
    #[error("CORE_URL must start with http:// or https://, got {0:?}")]
    InvalidCoreUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Core service base URL without a trailing slash.
    pub core_url: String,
    pub skin_setting_path: Option<PathBuf>,
    pub proxy_timeout: Duration,
}

impl PortalConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `CORE_URL`: default `http://core:8080`
    /// - `SKIN_SETTING_PATH`: skin `setting.json`; unset means no skin
    /// - `PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or `CORE_URL`
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let core_url = parse_core_url(std::env::var("CORE_URL").ok().as_deref())?;
        let skin_setting_path = std::env::var("SKIN_SETTING_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let proxy_timeout = Duration::from_secs(env_parse("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?);

        Ok(Self { port, core_url, skin_setting_path, proxy_timeout })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

fn parse_core_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map_or(DEFAULT_CORE_URL, str::trim).trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidCoreUrl(url.to_owned()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
