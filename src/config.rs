//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the listening port is host-private. Everything else is forwarded to
//! the browser as a `client::config::ClientConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ClientConfig, DEFAULT_API_BASE_URL, asset_base_from_api};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROVIDER_ID: i64 = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub client: ClientConfig,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:5000/api`
    /// - `ASSET_BASE_URL`: default `API_BASE_URL` without its trailing `/api`
    /// - `BOOKING_PROVIDER_STEP`: boolean, default false
    /// - `DEFAULT_PROVIDER_ID`: positive integer, default 1
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unreadable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unreadable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_base_url = var("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let asset_base_url = var("ASSET_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| asset_base_from_api(&api_base_url));
        let provider_step = match var("BOOKING_PROVIDER_STEP") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "BOOKING_PROVIDER_STEP", value: raw })?,
            None => false,
        };
        let default_provider_id = match var("DEFAULT_PROVIDER_ID") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|id| *id > 0)
                .ok_or(ConfigError::Invalid { key: "DEFAULT_PROVIDER_ID", value: raw })?,
            None => DEFAULT_PROVIDER_ID,
        };

        Ok(Self {
            port,
            client: ClientConfig { api_base_url, asset_base_url, provider_step, default_provider_id },
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
