//! StockDB - an inventory-tracking backend for computer stock
//!
//! A persistent `id -> Computer` map plus a small set of query and update
//! operations, exposed over a newline-delimited JSON TCP protocol.

pub mod config;
pub mod inventory;
pub mod protocol;
pub mod server;
pub mod storage;
