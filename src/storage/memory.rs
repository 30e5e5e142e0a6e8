use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{StorageBackend, StorageError};

/// In-memory key-value backend
///
/// Used by tests and by ephemeral runs without a configured `data_path`.
pub struct MemoryBackend {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self
            .data
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(data.remove(key))
    }

    fn values(&self) -> Result<Vec<Vec<u8>>, StorageError> {
        let data = self
            .data
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(data.values().cloned().collect())
    }
}
