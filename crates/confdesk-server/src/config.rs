//! Server configuration loaded from the environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_PATH: &str = "sample.db";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listening port (`PORT`)
    pub port: u16,
    /// SQLite file (`DATABASE_PATH`)
    pub database_path: String,
}

impl Config {
    /// Defaults overlaid with process environment variables.
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::default())
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .add_source(source)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration value")
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
