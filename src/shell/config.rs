// Runtime configuration read from the environment.
//
// Variables
// - TIME_LOGS_BIND_ADDR: listen address, default 0.0.0.0:8080.
// - TIME_LOGS_TABLE: record store table, default time_logs.
// - TIME_LOGS_ELAPSED_BASELINE: zero-when-finished (default) or end-at.
// - TIME_LOGS_TICK_MS: elapsed display tick period in milliseconds, default 1000.
//
// A `.env` file in the working directory is loaded first when present.

use crate::modules::time_logs::adapters::outbound::time_log_repository::DEFAULT_TABLE;
use crate::modules::time_logs::core::elapsed::{ElapsedBaseline, ParseElapsedBaselineError};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "TIME_LOGS_BIND_ADDR";
pub const TABLE_VAR: &str = "TIME_LOGS_TABLE";
pub const ELAPSED_BASELINE_VAR: &str = "TIME_LOGS_ELAPSED_BASELINE";
pub const TICK_MS_VAR: &str = "TIME_LOGS_TICK_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidBaseline {
        var: &'static str,
        #[source]
        source: ParseElapsedBaselineError,
    },

    #[error("{var}: expected a positive number of milliseconds, got '{value}'")]
    InvalidTick { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyTable { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub table: String,
    pub elapsed_baseline: ElapsedBaseline,
    pub tick_period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            table: DEFAULT_TABLE.to_string(),
            elapsed_baseline: ElapsedBaseline::default(),
            tick_period: Duration::from_millis(1000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?;
        }
        if let Some(value) = lookup(TABLE_VAR) {
            let table = value.trim();
            if table.is_empty() {
                return Err(ConfigError::EmptyTable { var: TABLE_VAR });
            }
            config.table = table.to_string();
        }
        if let Some(value) = lookup(ELAPSED_BASELINE_VAR) {
            config.elapsed_baseline =
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidBaseline {
                        var: ELAPSED_BASELINE_VAR,
                        source,
                    })?;
        }
        if let Some(value) = lookup(TICK_MS_VAR) {
            config.tick_period = match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTick { var: TICK_MS_VAR, value }),
            };
        }
        Ok(config)
    }
}
