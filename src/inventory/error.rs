use thiserror::Error;

use crate::storage::StorageError;

/// Inventory operation failures
///
/// Messages are surfaced verbatim to callers, so the wording of the
/// `NotFound`, `InsufficientStock` and `NoMatches` variants is part of the
/// external contract.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The requested id is absent from the store
    #[error("A computer with id={0} not found")]
    NotFound(String),
    /// A sale asked for more units than are in stock
    #[error("Not enough quantity in stock for computer with id={0}")]
    InsufficientStock(String),
    /// The input failed validation before touching the store
    #[error("{0}")]
    InvalidInput(String),
    /// A search produced an empty result
    #[error("No computers found for the query: {0}")]
    NoMatches(String),
    /// The storage layer failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_wording() {
        let err = InventoryError::NotFound("42".to_string());
        assert_eq!(err.to_string(), "A computer with id=42 not found");
    }

    #[test]
    fn test_insufficient_stock_wording() {
        let err = InventoryError::InsufficientStock("42".to_string());
        assert_eq!(
            err.to_string(),
            "Not enough quantity in stock for computer with id=42"
        );
    }

    #[test]
    fn test_no_matches_wording() {
        let err = InventoryError::NoMatches("gateway".to_string());
        assert_eq!(
            err.to_string(),
            "No computers found for the query: gateway"
        );
    }
}
