//! Configuration loading for the task backend.
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables:
//!
//! - `TODO_DATABASE_URL` replaces `database.url`
//! - `TODO_POOL_SIZE` replaces `database.pool_size`

use crate::task::adapters::postgres::TaskPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the database URL.
pub const DATABASE_URL_ENV: &str = "TODO_DATABASE_URL";

/// Environment variable overriding the connection pool size.
pub const POOL_SIZE_ENV: &str = "TODO_POOL_SIZE";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The pool size override is not a positive integer.
    #[error("invalid pool size '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// The database URL is empty.
    #[error("database url must not be empty")]
    EmptyDatabaseUrl,
}

/// Backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            pool_size: default_pool_size(),
        }
    }
}

fn default_database_url() -> String {
    "postgres://localhost/todo".to_owned()
}

const fn default_pool_size() -> u32 {
    4
}

impl Config {
    /// Loads configuration from `path` (when given) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when the resulting values are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(file) => Self::from_file(file)?,
            None => Self::default(),
        };
        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the text does not describe a [`Config`].
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolSize`] when the pool size override
    /// is not a positive integer.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }
        if let Some(raw) = lookup(POOL_SIZE_ENV) {
            self.database.pool_size = parse_pool_size(&raw)?;
        }
        Ok(self)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDatabaseUrl`] or
    /// [`ConfigError::InvalidPoolSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize(
                self.database.pool_size.to_string(),
            ));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Builds a connection pool for the configured database.
    ///
    /// # Errors
    ///
    /// Returns the pool error when the initial connections cannot be made.
    pub fn build_pool(&self) -> Result<TaskPgPool, PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.as_str());
        Pool::builder().max_size(self.pool_size).build(manager)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPoolSize(raw.to_owned())),
    }
}
