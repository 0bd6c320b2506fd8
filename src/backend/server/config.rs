/**
 * Server Configuration
 *
 * This module loads `ServerConfig` from environment variables (after
 * `.env`, see `main.rs`) and opens the SQLite pool.
 *
 * # Configuration Sources
 *
 * | Variable               | Default                              |
 * |------------------------|--------------------------------------|
 * | `DATABASE_URL`         | `sqlite://simplenotes.db?mode=rwc`   |
 * | `JWT_SECRET`           | required (debug builds: dev secret)  |
 * | `JWT_EXPIRES_SECS`     | `3600` (at most one year)            |
 * | `BCRYPT_COST`          | `12`                                 |
 * | `SERVER_HOST`          | `0.0.0.0`                            |
 * | `SERVER_PORT`          | `5001`                               |
 * | `CORS_ALLOWED_ORIGINS` | `*` or a comma-separated origin list |
 */

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://simplenotes.db?mode=rwc";
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 3600;
pub const DEFAULT_PORT: u16 = 5001;

/// Signing secret used by debug builds when `JWT_SECRET` is unset
const DEV_JWT_SECRET: &str = "simplenotes-dev-secret-change-me";

/// Origins allowed by the CORS layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// Only these exact origins
    List(Vec<HeaderValue>),
}

impl FromStr for CorsOrigins {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.split(',').any(|origin| origin.trim() == "*") {
            return Ok(Self::Any);
        }

        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Everything `create_app` and `main` need to start the server
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: CorsOrigins,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        match lookup("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                builder = builder.jwt_secret(DEV_JWT_SECRET);
            }
            None => {}
        }

        if let Some(secs) = lookup("JWT_EXPIRES_SECS") {
            builder = builder.token_ttl(Duration::from_secs(parse("JWT_EXPIRES_SECS", &secs)?));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(parse("SERVER_HOST", &host)?);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse("SERVER_PORT", &port)?);
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            builder = builder.cors_origins(origins.parse()?);
        }

        builder.build()
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: String,
    jwt_secret: Option<String>,
    token_ttl: Duration,
    bcrypt_cost: u32,
    host: IpAddr,
    port: u16,
    cors_origins: CorsOrigins,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: CorsOrigins::Any,
        }
    }
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn cors_origins(mut self, origins: CorsOrigins) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        // bcrypt accepts costs 4 through 31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        let ttl_secs = self.token_ttl.as_secs();
        if ttl_secs == 0 || ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRES_SECS",
                value: ttl_secs.to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self.database_url,
            jwt_secret,
            token_ttl: self.token_ttl,
            bcrypt_cost: self.bcrypt_cost,
            host: self.host,
            port: self.port,
            cors_origins: self.cors_origins,
        })
    }
}

/// Open the SQLite pool and apply migrations
///
/// In-memory URLs get a single long-lived connection: every SQLite
/// connection to `:memory:` is its own database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
