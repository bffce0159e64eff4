use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::time::Duration;

use taskdeck_config::constants::{
    CORS_ORIGIN, PORT, TASKDECK_API_HOST, TASKDECK_API_PORT, TASKDECK_CORS_ORIGIN,
    TASKDECK_HTTP_CONNECT_TIMEOUT_SECS,
};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid connect timeout: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    pub http_connect_timeout: Duration,
}

/// Reads the first variable that is set, preferring the current name over the legacy one
fn var_with_legacy(current: &str, legacy: &str) -> Option<String> {
    env::var(current).or_else(|_| env::var(legacy)).ok()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = var_with_legacy(TASKDECK_API_PORT, PORT)
            .map(|p| p.parse::<u16>())
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host_str = env::var(TASKDECK_API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let cors_origin = var_with_legacy(TASKDECK_CORS_ORIGIN, CORS_ORIGIN)
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let timeout_secs = match env::var(TASKDECK_HTTP_CONNECT_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Config {
            host,
            port,
            cors_origin,
            http_connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
