// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding the JSON collections
    pub data_dir: PathBuf,
    /// Frontend origin allowed by CORS (localhost is always allowed)
    pub frontend_url: String,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
}

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: parse_var("PORT", DEFAULT_PORT)?,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }

    /// Config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 0,
            data_dir: PathBuf::from("tests/fixtures"),
            frontend_url: "http://localhost:5173".to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}
