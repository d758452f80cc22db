use std::error::Error;
use std::fmt::{Display, Formatter};
use sweepbook_core::db::DbError;
use sweepbook_core::{ConfigError, LoggingError};

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Db(DbError),
    Io(std::io::Error),
    NotFound { kind: &'static str, id: String },
    InvalidMonth(String),
    ConfirmationRequired { action: &'static str, id: String },
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} `{id}` not found"),
            Self::InvalidMonth(raw) => {
                write!(f, "invalid month `{raw}`; expected YYYY-MM")
            }
            Self::ConfirmationRequired { action, id } => write!(
                f,
                "{action} `{id}` cannot be undone; re-run with --yes to confirm"
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidMonth(_) | Self::ConfirmationRequired { .. } => {
                None
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
