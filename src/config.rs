use std::{env, fmt::Display, str::FromStr};

use tracing::info;

use crate::error::StartupError;

pub const HOST_KEY: &str = "SUNSET_HOST";
pub const PORT_KEY: &str = "SUNSET_PORT";
pub const CORS_MAX_AGE_KEY: &str = "SUNSET_CORS_MAX_AGE_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_max_age_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_max_age_secs: 60 * 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: try_load(&lookup, HOST_KEY, defaults.host)?,
            port: try_load(&lookup, PORT_KEY, defaults.port)?,
            cors_max_age_secs: try_load(&lookup, CORS_MAX_AGE_KEY, defaults.cors_max_age_secs)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, StartupError>
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| StartupError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
