use serde::Deserialize;

use baggages_core::packing::NewBaggage;
use baggages_core::serde::deserialize_null_as_default;

/// Request payload for creating a new baggage.
///
/// `id` and `listId` in the body are ignored: the id comes from storage and
/// the list id from the request path. Missing or `null` fields take their
/// zero value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBaggage {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub is_checked: bool,
}

impl CreateBaggage {
    /// Converts the create request into an unsaved baggage bound to `list_id`.
    pub fn into_new_baggage(self, list_id: u64) -> NewBaggage {
        NewBaggage::new(list_id, self.name).checked(self.is_checked)
    }
}
