use std::{fs, io::ErrorKind, path::PathBuf};

use slvcricket_types::errors::PersistenceError;

use super::{KeyValueStore, validate_key};
use crate::atomic_write::write_atomically;

/// Keeps each key in its own `<key>.json` file under a data directory.
///
/// Writes replace the file atomically, so a crash mid-write never leaves a
/// truncated record behind.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), bytes = value.len(), "Read record");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        write_atomically(&path, value.as_bytes())?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote record");
        Ok(())
    }
}
