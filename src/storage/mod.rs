//! Durable key-value storage for inventory records
//!
//! The inventory only needs `get`/`put`/`remove`/`values` from its backing
//! map. Durability and on-disk layout live behind the `StorageBackend`
//! trait so the domain layer never touches RocksDB directly.

pub mod memory;
pub mod rocks;

use thiserror::Error;

pub use memory::MemoryBackend;
pub use rocks::RocksBackend;

/// Errors surfaced by the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend itself failed (I/O error, poisoned lock)
    #[error("storage backend error: {0}")]
    Backend(String),
    /// A stored record could not be encoded or decoded
    #[error("failed to decode stored record: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Byte-level key-value map with synchronous durability.
///
/// `get` returns `Ok(None)` for an absent key, `put` inserts or overwrites,
/// `remove` returns the removed value if the key was present. `values`
/// enumerates all stored values in no particular order; writes are durable
/// before the call returns.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn values(&self) -> Result<Vec<Vec<u8>>, StorageError>;
}
