//! `DB_*` environment variables and the Postgres connect options built from them.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

/// The service always listens here.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

/// Maximum pooled connections shared by all requests.
pub const MAX_CONNECTIONS: u32 = 5;

/// Default log directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "users_api=info,tower_http=info";

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";

#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    password: String,
    pub name: String,
    pub port: u16,
}

impl DbConfig {
    /// Load `.env` from the working directory, then read the `DB_*` variables.
    /// A missing `.env` file is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = dotenvy::dotenv()?;
        tracing::debug!(path = %path.display(), "loaded .env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Every variable is required and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let host = required(DB_HOST)?;
        let user = required(DB_USER)?;
        let password = required(DB_PASSWORD)?;
        let name = required(DB_NAME)?;
        let port_raw = required(DB_PORT)?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;
        Ok(DbConfig {
            host,
            user,
            password,
            name,
            port,
        })
    }

    /// Connect options; TLS is always disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Key/value connection string with the password masked.
impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} user={} password=*** dbname={} port={} sslmode=disable",
            self.host, self.user, self.name, self.port
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("port", &self.port)
            .finish()
    }
}
