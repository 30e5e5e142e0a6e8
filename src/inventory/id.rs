use uuid::Uuid;

/// Identifier minting capability
///
/// Injected into the inventory so record ids never depend on a specific
/// randomness source.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh, globally unique identifier
    fn generate(&self) -> String;
}

/// Random v4 UUIDs, the production generator
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
