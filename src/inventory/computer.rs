use serde::{Deserialize, Serialize};

/// One inventory record
///
/// The `id` is minted by the system on add and never changes afterwards.
/// `quantity` is unsigned so stock can never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computer {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub quantity: u64,
    pub description: String,
}

/// Caller-supplied fields for creating or fully replacing a record
///
/// The whole payload is required; update is a full replacement of every
/// non-id field, not a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerPayload {
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub quantity: u64,
    pub description: String,
}

impl ComputerPayload {
    /// Attach an identifier, producing a full record
    pub fn with_id(self, id: impl Into<String>) -> Computer {
        Computer {
            id: id.into(),
            brand: self.brand,
            model: self.model,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_id() {
        let payload = ComputerPayload {
            brand: "Dell".to_string(),
            model: "XPS".to_string(),
            price: 999.99,
            quantity: 3,
            description: "13-inch laptop".to_string(),
        };

        let computer = payload.clone().with_id("abc");
        assert_eq!(computer.id, "abc");
        assert_eq!(computer.brand, payload.brand);
        assert_eq!(computer.model, payload.model);
        assert_eq!(computer.price, payload.price);
        assert_eq!(computer.quantity, payload.quantity);
        assert_eq!(computer.description, payload.description);
    }

    #[test]
    fn test_payload_rejects_negative_quantity() {
        // Quantity is unsigned; a negative count fails at the JSON boundary
        let json = r#"{"brand":"Dell","model":"XPS","price":1.0,"quantity":-2,"description":""}"#;
        assert!(serde_json::from_str::<ComputerPayload>(json).is_err());
    }

    #[test]
    fn test_record_json_round_trip() {
        let computer = Computer {
            id: "abc".to_string(),
            brand: "Dell".to_string(),
            model: "XPS".to_string(),
            price: 999.99,
            quantity: 3,
            description: "13-inch laptop".to_string(),
        };

        let encoded = serde_json::to_vec(&computer).unwrap();
        let decoded: Computer = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(computer, decoded);
    }
}
