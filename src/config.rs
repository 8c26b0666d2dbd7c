use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
    #[error("invalid connect timeout '{value}': {source}")]
    InvalidTimeout {
        value: String,
        source: ParseIntError,
    },
    #[error("invalid batch size '{0}'")]
    InvalidBatchSize(String),
}

/// Settings for a single load run.
///
/// Database settings come from the environment; the input path and batch
/// settings start from defaults and may be overridden from the command line.
#[derive(Clone, PartialEq)]
pub struct LoaderConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub connect_timeout: Duration,
    pub collection: String,
    pub csv_path: PathBuf,
    pub batch_size: usize,
    pub batch_pause: Duration,
    pub dry_run: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            user: defaults::USER.to_string(),
            password: defaults::PASSWORD.to_string(),
            db_name: defaults::DB_NAME.to_string(),
            connect_timeout: defaults::CONNECT_TIMEOUT,
            collection: defaults::COLLECTION.to_string(),
            csv_path: PathBuf::from(defaults::CSV_PATH),
            batch_size: defaults::BATCH_SIZE,
            batch_pause: defaults::BATCH_PAUSE,
            dry_run: false,
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(envvars::PORT) {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => defaults::PORT,
        };
        let connect_timeout = match env::var(envvars::CONNECT_TIMEOUT_MS) {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|source| ConfigError::InvalidTimeout { value, source })?,
            Err(_) => defaults::CONNECT_TIMEOUT,
        };

        Ok(LoaderConfig {
            host: env_or(envvars::HOST, defaults::HOST),
            port,
            user: env_or(envvars::USER, defaults::USER),
            password: env_or(envvars::PASSWORD, defaults::PASSWORD),
            db_name: env_or(envvars::DB_NAME, defaults::DB_NAME),
            connect_timeout,
            ..Default::default()
        })
    }

    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(batch_size.to_string()));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_batch_pause(mut self, batch_pause: Duration) -> Self {
        self.batch_pause = batch_pause;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Credentials are only used when both user and password are set.
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("db_name", &self.db_name)
            .field("connect_timeout", &self.connect_timeout)
            .field("collection", &self.collection)
            .field("csv_path", &self.csv_path)
            .field("batch_size", &self.batch_size)
            .field("batch_pause", &self.batch_pause)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}
