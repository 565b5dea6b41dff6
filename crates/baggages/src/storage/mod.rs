//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `baggages_core::storage`. The backend is selected at startup
//! from [`Config::storage_backend`](crate::config::Config).
//!
//! - `sqlite` (default): SQLite database file using `rusqlite` and `tokio-rusqlite`
//! - `memory`: process-local maps, lost on restart

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
