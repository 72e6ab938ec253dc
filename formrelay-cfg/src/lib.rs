#![allow(clippy::expect_used)]
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, str::FromStr};

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: bool,
    pub address: SocketAddr,
    /// Base URL of the Bot API, without a trailing slash.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            address: SocketAddr::from_str("0.0.0.0:33010")
                .expect("Default value for config should never panic!"),
            api_url: TELEGRAM_API_URL.to_string(),
        }
    }
}
