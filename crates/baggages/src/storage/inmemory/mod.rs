//! In-memory storage backend.
//!
//! Stores lists and baggage in `BTreeMap`s wrapped in `Arc<RwLock<_>>`.
//! Useful for tests and throwaway runs where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
