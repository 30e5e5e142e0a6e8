use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::inventory::InventoryError;

/// Wire outcome of one operation
///
/// Serializes externally tagged: `{"ok": <value>}` or `{"err": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Err(String),
}

impl Response {
    /// Wrap an operation outcome; failures cross the wire as message text
    pub fn from_result<T: Serialize>(result: Result<T, InventoryError>) -> Self {
        match result {
            Ok(value) => Response::Ok(
                serde_json::to_value(value).expect("serialization should succeed"),
            ),
            Err(e) => Response::Err(e.to_string()),
        }
    }

    /// Encode as a single response line (without the trailing newline)
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("serialization should succeed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_ok() {
        let response = Response::Ok(json!({"id": "abc"}));
        assert_eq!(response.encode(), r#"{"ok":{"id":"abc"}}"#);
    }

    #[test]
    fn test_encode_err() {
        let response = Response::Err("A computer with id=42 not found".to_string());
        assert_eq!(
            response.encode(),
            r#"{"err":"A computer with id=42 not found"}"#
        );
    }

    #[test]
    fn test_from_result_ok() {
        let response = Response::from_result(Ok::<_, InventoryError>(vec!["Dell".to_string()]));
        assert_eq!(response, Response::Ok(json!(["Dell"])));
    }

    #[test]
    fn test_from_result_err_carries_message() {
        let response =
            Response::from_result::<()>(Err(InventoryError::NotFound("42".to_string())));
        assert_eq!(
            response,
            Response::Err("A computer with id=42 not found".to_string())
        );
    }
}
