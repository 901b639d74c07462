//! Environment-driven server configuration.

use crate::server::{error::config::ConfigError, service::short_code::ShortCodeStrategy};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    /// Which short code scheme recipe links use for this deployment
    pub short_code_strategy: ShortCodeStrategy,
    /// Set when the server runs behind a TLS terminating proxy, short links are then
    /// always emitted with `https://`
    pub secure_proxy_ssl: bool,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration using the provided variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let short_code_strategy = match lookup("SHORT_CODE_STRATEGY") {
            Some(value) => value.parse::<ShortCodeStrategy>().map_err(|reason| {
                ConfigError::InvalidEnvValue {
                    var: "SHORT_CODE_STRATEGY".to_string(),
                    reason,
                }
            })?,
            None => ShortCodeStrategy::default(),
        };

        let secure_proxy_ssl = match lookup("SECURE_PROXY_SSL") {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "SECURE_PROXY_SSL".to_string(),
                reason: format!("expected true or false, got {:?}", value),
            })?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            short_code_strategy,
            secure_proxy_ssl,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
