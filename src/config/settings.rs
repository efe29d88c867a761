use crate::pipeline::{DEFAULT_IDLE_INTERVAL, DrainConfig};
use crate::queue::RedisSettings;
use crate::sanitizer::NormalizationMode;
use crate::sink::MongoSettings;

use std::time::Duration;

const DEFAULT_REDIS_PORT: u16 = 6379;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the process needs to start draining.
#[derive(Debug, Clone)]
pub struct Settings {
    pub redis: RedisSettings,
    pub queue_name: String,
    pub mongo: MongoSettings,
    pub drain: DrainConfig,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary lookup function (`key -> value`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| -> Option<String> {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let port = match get("REDIS_PORT") {
            Some(value) => value.parse::<u16>().map_err(|err| ConfigError::Invalid {
                var: "REDIS_PORT",
                value: value.clone(),
                reason: err.to_string(),
            })?,
            None => DEFAULT_REDIS_PORT,
        };

        let idle_interval = match get("DRAIN_IDLE_INTERVAL_MS") {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|err| ConfigError::Invalid {
                    var: "DRAIN_IDLE_INTERVAL_MS",
                    value: value.clone(),
                    reason: err.to_string(),
                })?,
            None => DEFAULT_IDLE_INTERVAL,
        };

        let normalization = match get("DRAIN_NAN_NORMALIZATION") {
            Some(value) => value
                .parse::<NormalizationMode>()
                .map_err(|reason| ConfigError::Invalid {
                    var: "DRAIN_NAN_NORMALIZATION",
                    value: value.clone(),
                    reason,
                })?,
            None => NormalizationMode::default(),
        };

        Ok(Self {
            redis: RedisSettings {
                host: require("REDIS_HOST")?,
                port,
                username: get("REDIS_USERNAME"),
                password: get("REDIS_PASSWORD"),
            },
            queue_name: require("REDIS_QUEUE_NAME")?,
            mongo: MongoSettings {
                uri: require("MONGOURI")?,
                database: require("MONGO_DB_NAME")?,
                collection: require("MONGO_COLLECTION_NAME")?,
            },
            drain: DrainConfig {
                idle_interval,
                normalization,
            },
        })
    }
}
