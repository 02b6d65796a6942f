//! Environment based configuration.

use std::net::{IpAddr, Ipv4Addr};

use crate::server::error::config::ConfigError;

/// Used when `DATABASE_URL` is unset, a SQLite file created on first start
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
static DEFAULT_PORT: u16 = 3000;

/// Server configuration read from the environment
pub struct Config {
    /// SeaORM connection string, SQLite or PostgreSQL
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub host: IpAddr,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = match get("HOST") {
            Some(host) => host.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidEnvValue {
                    var: "HOST".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_HOST,
        };

        let port = match get("PORT") {
            Some(port) => port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
