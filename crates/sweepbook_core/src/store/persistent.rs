//! JSON document layer over a [`KeyValueStore`].
//!
//! # Invariants
//! - `load` never fails: absent, unreadable or malformed values yield the
//!   caller's default.
//! - `save` never fails: errors are logged and the in-memory value stays
//!   authoritative for the session.

use super::{KeyValueStore, StoreError, StoreResult};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct PersistentStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads and decodes `key`; `Ok(None)` when nothing is stored.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Encodes and writes `value` under `key`.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.put(key, &raw)
    }

    /// Returns the stored value for `key`, or `default` on absence or failure.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!("event=store_load module=store status=fallback key={key} error={err}");
                default
            }
        }
    }

    /// Persists `value` under `key`, logging and swallowing failures.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            error!("event=store_save module=store status=error key={key} error={err}");
        }
    }
}
