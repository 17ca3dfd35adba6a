use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

pub const DEFAULT_TABLE: &str = "todos";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown store `{0}`, expected `dynamodb` or `memory`")]
    UnknownStore(String),

    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    DynamoDb,
    Memory,
}

impl FromStr for Store {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Store, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Store::DynamoDb),
            "memory" => Ok(Store::Memory),
            _ => Err(ConfigError::UnknownStore(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub store: Store,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("TODO_STORE") {
            Some(value) => value.parse()?,
            None => Store::DynamoDb,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => {
                Level::from_str(&value).map_err(|_| ConfigError::UnknownLogLevel(value))?
            }
            None => Level::INFO,
        };

        Ok(Config {
            table_name: lookup("TODO_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            store,
            log_level,
        })
    }
}
