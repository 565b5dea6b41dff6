//! Serde helper functions for request payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing field also gets the default.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
