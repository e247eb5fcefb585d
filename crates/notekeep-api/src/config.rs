//! Server configuration loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/notekeep` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `NOTE_STORE` | `postgres` (or `memory`) |
//! | `MAX_TITLE_LENGTH` | `255` |
//! | `MAX_CONTENT_LENGTH` | `10000` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` (comma-separated) |
//! | `MAX_BODY_BYTES` | `1048576` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_MIN_CONNECTIONS` | `1` |
//! | `DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `DB_IDLE_TIMEOUT_SECS` | `600` |
//! | `DB_MAX_LIFETIME_SECS` | `1800` (`0` disables recycling) |
//!
//! Numeric values that fail to parse fall back to the default with a warning.
//! With the Postgres store, `MAX_TITLE_LENGTH` cannot exceed the width of the
//! `title` column.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use notekeep_core::defaults;
use notekeep_core::{Error, Result, ValidationLimits};
use notekeep_db::PoolConfig;

/// Which [`notekeep_core::NoteRepository`] implementation serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "mem" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(Error::Config(format!(
                "unknown NOTE_STORE '{}' (expected 'postgres' or 'memory')",
                other
            ))),
        }
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub limits: ValidationLimits,
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
    pub pool: PoolConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            store: StoreBackend::Postgres,
            limits: ValidationLimits::default(),
            allowed_origins: parse_origins(defaults::ALLOWED_ORIGINS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
            pool: PoolConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        let store = match lookup("NOTE_STORE") {
            Some(value) => value.parse()?,
            None => base.store,
        };

        let limits = ValidationLimits::new(
            parse_or(&lookup, "MAX_TITLE_LENGTH", base.limits.max_title),
            parse_or(&lookup, "MAX_CONTENT_LENGTH", base.limits.max_content),
        );
        if limits.max_title == 0 || limits.max_content == 0 {
            return Err(Error::Config(
                "MAX_TITLE_LENGTH and MAX_CONTENT_LENGTH must be at least 1".to_string(),
            ));
        }

        if store == StoreBackend::Postgres && limits.max_title > defaults::MAX_TITLE_LENGTH {
            return Err(Error::Config(format!(
                "MAX_TITLE_LENGTH {} exceeds the {}-character title column of the postgres store",
                limits.max_title,
                defaults::MAX_TITLE_LENGTH
            )));
        }

        let pool = pool_from_lookup(&lookup, base.pool)?;

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) if !raw.trim().is_empty() => parse_origins(&raw),
            _ => base.allowed_origins,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(base.database_url),
            host: lookup("HOST").unwrap_or(base.host),
            port: parse_or(&lookup, "PORT", base.port),
            store,
            limits,
            allowed_origins,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", base.max_body_bytes),
            pool,
        })
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn pool_from_lookup<F>(lookup: &F, base: PoolConfig) -> Result<PoolConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let max_lifetime_secs = parse_or(
        lookup,
        "DB_MAX_LIFETIME_SECS",
        base.max_lifetime.map_or(0, |d| d.as_secs()),
    );

    let pool = PoolConfig::new()
        .max_connections(parse_or(lookup, "DB_MAX_CONNECTIONS", base.max_connections))
        .min_connections(parse_or(lookup, "DB_MIN_CONNECTIONS", base.min_connections))
        .connect_timeout(Duration::from_secs(parse_or(
            lookup,
            "DB_CONNECT_TIMEOUT_SECS",
            base.connect_timeout.as_secs(),
        )))
        .idle_timeout(Duration::from_secs(parse_or(
            lookup,
            "DB_IDLE_TIMEOUT_SECS",
            base.idle_timeout.as_secs(),
        )))
        .max_lifetime((max_lifetime_secs > 0).then(|| Duration::from_secs(max_lifetime_secs)));

    if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
        return Err(Error::Config(format!(
            "DB_MIN_CONNECTIONS ({}) must not exceed DB_MAX_CONNECTIONS ({}), which must be at least 1",
            pool.min_connections, pool.max_connections
        )));
    }
    Ok(pool)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %raw, default = %default, "Invalid config value, using default");
                default
            }
        },
        None => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
