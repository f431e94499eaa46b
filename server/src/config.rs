//! Process configuration read from environment variables.
//!
//! Variables may also come from a `.env` file, loaded with `load_env_file`
//! before `Config::from_env`; values already in the environment win.
//! `DATABASE_URL` (or the older `DATABASE_URI`) is required; `HOST`, `PORT`
//! and `LOG_LEVEL` fall back to defaults. Any problem is reported as a
//! `ConfigError` so `main` can stop before touching the database.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use thiserror::Error;
use tracing::Level;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },

    #[error("failed to load {path}: {message}")]
    EnvFile { path: String, message: String },
}

/// Load `path` into the process environment without overriding variables
/// that are already set. Returns `Ok(false)` when the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(ConfigError::EnvFile {
            path: path.display().to_string(),
            message: err.to_string(),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub addr: SocketAddr,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .or_else(|| var("DATABASE_URI"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = match var("HOST") {
            Some(value) => parse("HOST", value)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match var("PORT") {
            Some(value) => parse("PORT", value)?,
            None => DEFAULT_PORT,
        };
        let log_level = match var("LOG_LEVEL") {
            Some(value) => parse("LOG_LEVEL", value)?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            addr: SocketAddr::new(host, port),
            log_level,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
