use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_STARTING_BALANCE: f64 = 100.0;
const DEFAULT_CATALOG_CACHE_CAPACITY: usize = 8;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Credits granted to a wallet the first time a user touches the economy.
    pub starting_balance: f64,
    /// Number of catalog pools kept in the LRU cache.
    pub catalog_cache_capacity: usize,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// Call `dotenvy::dotenv()` first to load a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            starting_balance: optional("STARTING_BALANCE", DEFAULT_STARTING_BALANCE)?,
            catalog_cache_capacity: optional(
                "CATALOG_CACHE_CAPACITY",
                DEFAULT_CATALOG_CACHE_CAPACITY,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}
