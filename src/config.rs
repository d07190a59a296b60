use std::num::ParseIntError;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.p2pquake.net/v2/history";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

const UPSTREAM_URL_KEY: &str = "QUAKE_FEED_UPSTREAM_URL";
const HOST_KEY: &str = "QUAKE_FEED_HOST";
const PORT_KEY: &str = "QUAKE_FEED_PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("QUAKE_FEED_PORT must be a port number, got {value:?}: {source}")]
    Port {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("QUAKE_FEED_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub upstream_url: String,
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_timeout: UPSTREAM_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env.local");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = read(UPSTREAM_URL_KEY) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::UpstreamUrl(url));
            }
            config.upstream_url = url;
        }
        if let Some(host) = read(HOST_KEY) {
            config.host = host;
        }
        if let Some(port) = read(PORT_KEY) {
            config.port = port
                .parse()
                .map_err(|source| ConfigError::Port { value: port, source })?;
        }

        Ok(config)
    }
}
