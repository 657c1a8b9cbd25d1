use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://todoApplication.db".to_string(),
            listen_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            max_connections: 5,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `LISTEN_ADDR`, `PORT` and `DB_MAX_CONNECTIONS`,
    /// after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: parse_var(&lookup, "LISTEN_ADDR", defaults.listen_addr)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
