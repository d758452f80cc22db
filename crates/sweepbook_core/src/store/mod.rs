//! Durable key-value persistence for app state.
//!
//! # Responsibility
//! - Define the `KeyValueStore` seam between the state container and storage.
//! - Provide SQLite-backed and in-memory backends.
//! - Wrap backends in [`PersistentStore`], which speaks JSON documents and
//!   never raises storage failures to callers.
//!
//! # Invariants
//! - One document per key; `put` replaces the previous document wholesale.
//! - Backend errors are semantic (`StoreError`), not panics.

mod memory;
mod persistent;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use persistent::PersistentStore;
pub use sqlite::SqliteKeyValueStore;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key for the customer list.
pub const CUSTOMERS_KEY: &str = "customers";
/// Store key for the appointment list.
pub const APPOINTMENTS_KEY: &str = "appointments";
/// Store key for the inventory list.
pub const INVENTORY_KEY: &str = "inventory";
/// Store key for the invoice list.
pub const INVOICES_KEY: &str = "invoices";
/// Store key for the business profile singleton.
pub const BUSINESS_INFO_KEY: &str = "businessInfo";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize value for key `{key}`: {source}")
            }
            Self::Deserialize { key, source } => {
                write!(f, "malformed stored value for key `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { source, .. } | Self::Deserialize { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Raw text storage addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put(key, value)
    }
}
