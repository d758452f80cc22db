//! Runtime configuration resolved from the environment.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `SWEEPBOOK_DB_PATH` | store database file | `<temp>/sweepbook.sqlite3` |
//! | `SWEEPBOOK_LOG_LEVEL` | `trace\|debug\|info\|warn\|error` | build-mode default |
//! | `SWEEPBOOK_LOG_DIR` | absolute directory for rolling logs | logging off |
//!
//! Blank values are treated as unset.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "SWEEPBOOK_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "SWEEPBOOK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "SWEEPBOOK_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "sweepbook.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        variable: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { variable, message } => {
                write!(f, "invalid value for {variable}: {message}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name
    /// to its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = non_blank(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

        let log_level = match non_blank(LOG_LEVEL_ENV) {
            Some(raw) => normalize_level(&raw).map_err(|err| ConfigError::InvalidValue {
                variable: LOG_LEVEL_ENV,
                message: err.to_string(),
            })?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = AppConfig::from_lookup(lookup(&[(DB_PATH_ENV, "  ")])).unwrap();
        assert!(config.db_path.ends_with("sweepbook.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_normalized() {
        let config = AppConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, "/data/book.db"),
            (LOG_LEVEL_ENV, "WARNING"),
            (LOG_DIR_ENV, "/var/log/sweepbook"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/book.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/sweepbook")));
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "verbose")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { variable, .. } if variable == LOG_LEVEL_ENV));
    }
}
