use std::{collections::HashMap, sync::Mutex};

use slvcricket_types::errors::PersistenceError;

use super::{KeyValueStore, validate_key};

/// In-process store, optionally capped at a total number of bytes.
///
/// The cap mimics a browser storage quota: a `set` that would push the sum
/// of all values over it fails and leaves the old value in place.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::default(),
            quota: Some(quota),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        validate_key(key)?;
        let entries = self
            .entries
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned("get"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned("set"))?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let size = others + value.len();
            if size > quota {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    quota,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
