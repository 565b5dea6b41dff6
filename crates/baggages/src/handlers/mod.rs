pub mod baggages;
pub mod error;
pub mod health;
pub mod lists;

pub use error::ApiError;

use serde::de::DeserializeOwned;

/// Parses a path segment as a row ID.
///
/// Segments that are not a `u64` cannot name a stored row, so callers treat
/// `None` exactly like a missing row.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// Decodes a request body as JSON.
///
/// The `Content-Type` header is not consulted; only the bytes matter.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
