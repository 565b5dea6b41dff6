use serde::Deserialize;

use baggages_core::packing::NewList;
use baggages_core::serde::deserialize_null_as_default;

/// Request payload for creating a new list.
///
/// Any `id` in the body is ignored; storage assigns it. A missing or `null`
/// name becomes the empty string.
#[derive(Debug, Deserialize)]
pub struct CreateList {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
}

impl CreateList {
    /// Converts the create request into an unsaved list.
    pub fn into_new_list(self) -> NewList {
        NewList::new(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let payload: CreateList = serde_json::from_str(r#"{"id": 99, "name": "Trip"}"#).unwrap();

        assert_eq!(payload.into_new_list(), NewList::new("Trip"));
    }

    #[test]
    fn test_missing_or_null_name_is_empty() {
        for body in ["{}", r#"{"name": null}"#] {
            let payload: CreateList = serde_json::from_str(body).unwrap();

            assert_eq!(payload.into_new_list(), NewList::new(""));
        }
    }

    #[test]
    fn test_non_string_name_is_rejected() {
        assert!(serde_json::from_str::<CreateList>(r#"{"name": ["Trip"]}"#).is_err());
    }
}
