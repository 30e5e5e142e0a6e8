use std::path::Path;

use rocksdb::{DB, IteratorMode, Options};

use crate::storage::{StorageBackend, StorageError};

/// RocksDB-backed durable key-value backend
///
/// Every write is flushed before the call returns, so a record survives a
/// process restart as soon as the operation that wrote it has completed.
pub struct RocksBackend {
    db: DB,
}

impl RocksBackend {
    /// Open the database at the given path, creating it if missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path).map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Self { db })
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl StorageBackend for RocksBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.db
            .get(key.as_bytes())
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.db
            .put(key.as_bytes(), value)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let previous = self.get(key)?;
        if previous.is_some() {
            self.db
                .delete(key.as_bytes())
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            self.flush()?;
        }
        Ok(previous)
    }

    fn values(&self) -> Result<Vec<Vec<u8>>, StorageError> {
        let mut values = Vec::new();
        for item in self.db.iterator(IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StorageError::Backend(e.to_string()))?;
            values.push(value.into_vec());
        }
        Ok(values)
    }
}
