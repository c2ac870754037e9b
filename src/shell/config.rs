use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR: &str = "EVENT_HUB_BIND_ADDR";
pub const API_TOKEN: &str = "EVENT_HUB_API_TOKEN";
pub const SEED: &str = "EVENT_HUB_SEED";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// When set, requests must present it as a bearer token. Otherwise every request is rejected.
    pub api_token: Option<String>,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ADDR,
            value: bind_addr.clone(),
        })?;

        let api_token = lookup(API_TOKEN).filter(|token| !token.trim().is_empty());

        let seed_sample_data = match lookup(SEED) {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::Invalid { key: SEED, value }),
            },
        };

        Ok(Self {
            bind_addr,
            api_token,
            seed_sample_data,
        })
    }
}
