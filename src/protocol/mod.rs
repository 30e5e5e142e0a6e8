//! Wire protocol
//!
//! Requests and responses are single JSON lines. A request names its
//! operation in the `op` field; a response is `{"ok": ...}` on success or
//! `{"err": "..."}` carrying the failure message.

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;
