//! File-backed key-value store with capability-scoped directory access.

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::workspace::ports::{KeyValueStore, StoreError, StoreResult};

/// Key-value store writing one JSON document per key inside a directory.
///
/// The directory handle is capability-scoped: the store can only touch
/// files beneath the directory it was opened on.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: Arc<Dir>,
}

impl JsonFileStore {
    /// Opens a store rooted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the directory cannot be opened.
    pub fn open(path: &str) -> StoreResult<Self> {
        let dir = Dir::open_ambient_dir(path, cap_std::ambient_authority())
            .map_err(StoreError::backend)?;
        Ok(Self { dir: Arc::new(dir) })
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::backend(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.dir
            .write(Self::file_name(key), value)
            .map_err(StoreError::backend)
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::backend(err)),
        }
    }
}
