//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - locations(id, address, latitude, longitude)
//!
//! The table is created on first open and seeded with a fixed list of
//! places when empty.

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use sqlite::{LocationStore, StoreStats};
