use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DATABASE_URL, DB_CONNECT_RETRIES, ENV, MAX_BODY_SIZE_BYTES,
    RATE_LIMIT_BURST, RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, SHUTDOWN_TIMEOUT_SECS,
    USER_API_PORT,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Parse `key` with `lookup`, falling back to `default` when the value is
/// absent or does not parse.
fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(env_var = key, value = %raw, "ignoring unparseable configuration value");
                default
            }
        },
        None => default,
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareConfig {
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 100,
            rate_limit_burst: 150,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let rate_limit_per_minute =
            parse_or(&lookup, RATE_LIMIT_PER_MINUTE, default.rate_limit_per_minute);
        if rate_limit_per_minute == 0 {
            return Err(ConfigError::Zero(RATE_LIMIT_PER_MINUTE));
        }

        let rate_limit_burst = parse_or(&lookup, RATE_LIMIT_BURST, default.rate_limit_burst);
        if rate_limit_burst == 0 {
            return Err(ConfigError::Zero(RATE_LIMIT_BURST));
        }

        let request_timeout_secs = parse_or(
            &lookup,
            REQUEST_TIMEOUT_SECS,
            default.request_timeout.as_secs(),
        );
        let shutdown_timeout_secs = parse_or(
            &lookup,
            SHUTDOWN_TIMEOUT_SECS,
            default.shutdown_timeout.as_secs(),
        );
        let max_body_size = parse_or(&lookup, MAX_BODY_SIZE_BYTES, default.max_body_size);

        let cors_allowed_origins = lookup(CORS_ALLOWED_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(default.cors_allowed_origins);

        Ok(Self {
            rate_limit_per_minute,
            rate_limit_burst,
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_size,
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
            cors_allowed_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    /// Milliseconds between two replenished rate-limit tokens.
    pub fn replenish_interval_ms(&self) -> u64 {
        (60_000 / u64::from(self.rate_limit_per_minute)).max(1)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub database_url: String,
    pub port: u16,
    pub db_connect_retries: u32,
    pub middleware: MiddlewareConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            env: require(&lookup, ENV)?,
            database_url: require(&lookup, DATABASE_URL)?,
            port: parse_or(&lookup, USER_API_PORT, 3333),
            db_connect_retries: parse_or(&lookup, DB_CONNECT_RETRIES, 10),
            middleware: MiddlewareConfig::from_lookup(&lookup)?,
        })
    }
}
