//! Core types and storage contracts for the baggages checklist API.
//!
//! This crate holds no I/O: entity types live in [`packing`] and the
//! repository traits every storage backend implements live in [`storage`].

pub mod packing;
pub mod serde;
pub mod storage;
