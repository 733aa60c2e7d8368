use std::env::var;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_BROADCAST_PERIOD_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env param {0}")]
    Missing(&'static str),
    #[error("invalid value for env param {0}")]
    Invalid(&'static str),
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub channel_token: String,
    pub backend_base_url: String,
    pub broadcast_period_secs: u64,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();

        Ok(Config {
            host: var("HOST").map_err(|_| ConfigError::Missing("HOST"))?,
            port: var("PORT")
                .map_err(|_| ConfigError::Missing("PORT"))?
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            channel_token: var("LINE_CHANNEL_ACCESS_TOKEN")
                .map_err(|_| ConfigError::Missing("LINE_CHANNEL_ACCESS_TOKEN"))?,
            backend_base_url: var("BACKEND_BASE_URL")
                .map_err(|_| ConfigError::Missing("BACKEND_BASE_URL"))?,
            broadcast_period_secs: match var("BROADCAST_PERIOD_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("BROADCAST_PERIOD_SECS"))?,
                Err(_) => DEFAULT_BROADCAST_PERIOD_SECS,
            },
        })
    }
}
