//! Inventory domain
//!
//! This module provides the `Computer` record, the typed store layered on a
//! storage backend, and the operation set exposed over the wire.

pub mod computer;
pub mod error;
pub mod id;
pub mod store;

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

pub use computer::{Computer, ComputerPayload};
pub use error::InventoryError;
pub use id::{IdGenerator, UuidIds};
pub use store::ComputerStore;

use crate::storage::StorageBackend;

/// Records with quantity strictly below this show up in the low-stock report
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// Minimum accepted search query length
pub const MIN_QUERY_LEN: usize = 3;

type Result<T> = std::result::Result<T, InventoryError>;

/// The inventory: a typed store plus the operation set layered on it
///
/// Mutating operations serialize on an internal mutex, so the
/// read-modify-write of update/sell/resupply/set-price cannot lose updates
/// when connections run on concurrent tasks. Serialization is global; the
/// dataset is expected to stay small.
pub struct Inventory {
    store: ComputerStore,
    ids: Box<dyn IdGenerator>,
    write_lock: Mutex<()>,
}

impl Inventory {
    /// Create an inventory over the given backend and id generator
    pub fn new(backend: Box<dyn StorageBackend>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: ComputerStore::new(backend),
            ids,
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guard carries no data, so a poisoned lock is still usable
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All records
    pub fn list(&self) -> Result<Vec<Computer>> {
        Ok(self.store.values()?)
    }

    /// Point lookup by id
    pub fn get(&self, id: &str) -> Result<Computer> {
        self.store
            .get(id)?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Mint a fresh id and insert the record
    pub fn add(&self, payload: ComputerPayload) -> Result<Computer> {
        let _guard = self.lock_writes();
        let computer = payload.with_id(self.ids.generate());
        self.store.put(&computer)?;
        Ok(computer)
    }

    /// Replace every field except the id
    pub fn update(&self, id: &str, payload: ComputerPayload) -> Result<Computer> {
        let _guard = self.lock_writes();
        let existing = self.get(id)?;
        let updated = payload.with_id(existing.id);
        self.store.put(&updated)?;
        Ok(updated)
    }

    /// Remove the record, returning it
    pub fn delete(&self, id: &str) -> Result<Computer> {
        let _guard = self.lock_writes();
        self.store
            .remove(id)?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Subtract sold units from stock; fails rather than going negative
    pub fn sell(&self, id: &str, amount: i64) -> Result<Computer> {
        if amount <= 0 {
            return Err(InventoryError::InvalidInput(format!(
                "Cannot sell a non-positive amount: {amount}"
            )));
        }
        let amount = amount as u64;

        let _guard = self.lock_writes();
        let mut computer = self.get(id)?;
        if computer.quantity < amount {
            return Err(InventoryError::InsufficientStock(id.to_string()));
        }
        computer.quantity -= amount;
        self.store.put(&computer)?;
        Ok(computer)
    }

    /// Add restocked units; there is no upper bound on stock
    pub fn resupply(&self, id: &str, amount: i64) -> Result<Computer> {
        if amount <= 0 {
            return Err(InventoryError::InvalidInput(format!(
                "Cannot resupply a non-positive amount: {amount}"
            )));
        }

        let _guard = self.lock_writes();
        let mut computer = self.get(id)?;
        computer.quantity += amount as u64;
        self.store.put(&computer)?;
        Ok(computer)
    }

    /// Replace the price field only
    pub fn set_price(&self, id: &str, price: f64) -> Result<Computer> {
        let _guard = self.lock_writes();
        let mut computer = self.get(id)?;
        computer.price = price;
        self.store.put(&computer)?;
        Ok(computer)
    }

    /// Case-insensitive substring match over brand, model, and the
    /// stringified price. Matching the price as text means a query like
    /// "9.9" matches a price of 199.99.
    pub fn search(&self, query: &str) -> Result<Vec<Computer>> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Err(InventoryError::InvalidInput(format!(
                "Search query must be at least {MIN_QUERY_LEN} characters"
            )));
        }

        let needle = query.to_lowercase();
        let matches: Vec<Computer> = self
            .store
            .values()?
            .into_iter()
            .filter(|c| {
                c.brand.to_lowercase().contains(&needle)
                    || c.model.to_lowercase().contains(&needle)
                    || c.price.to_string().contains(&needle)
            })
            .collect();

        if matches.is_empty() {
            return Err(InventoryError::NoMatches(query.to_string()));
        }
        Ok(matches)
    }

    /// Full scan filtered by `min <= price <= max`, both bounds inclusive.
    /// An empty result is a valid success.
    pub fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<Computer>> {
        Ok(self
            .store
            .values()?
            .into_iter()
            .filter(|c| c.price >= min && c.price <= max)
            .collect())
    }

    /// Sum of `price * quantity` over every record
    pub fn total_value(&self) -> Result<f64> {
        Ok(self
            .store
            .values()?
            .iter()
            .map(|c| c.price * c.quantity as f64)
            .sum())
    }

    /// One message per record below the threshold; a sentinel message when
    /// none qualify
    pub fn check_low_stock(&self) -> Result<Vec<String>> {
        let notifications: Vec<String> = self
            .store
            .values()?
            .iter()
            .filter(|c| c.quantity < LOW_STOCK_THRESHOLD)
            .map(|c| {
                format!(
                    "Low stock for {} {}. Current quantity: {}",
                    c.brand, c.model, c.quantity
                )
            })
            .collect();

        if notifications.is_empty() {
            return Ok(vec!["No low-stock notifications".to_string()]);
        }
        Ok(notifications)
    }

    /// Notifications are computed on demand, never stored, so there is
    /// nothing to clear; the operation acknowledges and does nothing
    pub fn clear_low_stock_notifications(&self) -> Result<String> {
        Ok("Low-stock notifications cleared".to_string())
    }

    /// Single-field projection of the description
    pub fn description(&self, id: &str) -> Result<String> {
        Ok(self.get(id)?.description)
    }

    /// Single-field projection of the quantity on hand
    pub fn quantity(&self, id: &str) -> Result<u64> {
        Ok(self.get(id)?.quantity)
    }

    /// Deduplicated brand names, sorted for deterministic output
    pub fn brands(&self) -> Result<Vec<String>> {
        let brands: BTreeSet<String> = self
            .store
            .values()?
            .into_iter()
            .map(|c| c.brand)
            .collect();
        Ok(brands.into_iter().collect())
    }
}
