use crate::inventory::Computer;
use crate::storage::{StorageBackend, StorageError};

/// Typed `id -> Computer` layer over a byte-level backend
///
/// Records are stored JSON-encoded under their id. Callers always receive
/// owned copies, never references into the store.
pub struct ComputerStore {
    backend: Box<dyn StorageBackend>,
}

impl ComputerStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Point lookup; an absent id is `Ok(None)`
    pub fn get(&self, id: &str) -> Result<Option<Computer>, StorageError> {
        match self.backend.get(id)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Insert or overwrite the record under its own id
    pub fn put(&self, computer: &Computer) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(computer)?;
        self.backend.put(&computer.id, bytes)
    }

    /// Delete, returning the removed record if it was present
    pub fn remove(&self, id: &str) -> Result<Option<Computer>, StorageError> {
        match self.backend.remove(id)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All records, in no particular order
    pub fn values(&self) -> Result<Vec<Computer>, StorageError> {
        self.backend
            .values()?
            .iter()
            .map(|bytes| serde_json::from_slice(bytes).map_err(StorageError::from))
            .collect()
    }
}
