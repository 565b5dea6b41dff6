use serde::{Deserialize, Serialize};

/// A named checklist that owns baggage items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: u64,
    pub name: String,
}

/// A list that has not been stored yet. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
}

impl NewList {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Attaches the id assigned by storage.
    pub fn into_list(self, id: u64) -> List {
        List {
            id,
            name: self.name,
        }
    }
}

/// A checkable item belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baggage {
    pub id: u64,
    pub list_id: u64,
    pub name: String,
    #[serde(default)]
    pub is_checked: bool,
}

impl Baggage {
    /// Returns a copy with `is_checked` set to the given value.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.is_checked = checked;
        self
    }
}

/// A baggage item that has not been stored yet. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBaggage {
    pub list_id: u64,
    pub name: String,
    pub is_checked: bool,
}

impl NewBaggage {
    /// Creates an unchecked baggage bound to `list_id`.
    pub fn new(list_id: u64, name: impl Into<String>) -> Self {
        Self {
            list_id,
            name: name.into(),
            is_checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.is_checked = checked;
        self
    }

    /// Attaches the id assigned by storage.
    pub fn into_baggage(self, id: u64) -> Baggage {
        Baggage {
            id,
            list_id: self.list_id,
            name: self.name,
            is_checked: self.is_checked,
        }
    }
}

/// A list together with its baggage, as returned by the single-list fetch.
///
/// The list's own fields are flattened next to the `_baggages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWithBaggages {
    #[serde(flatten)]
    pub list: List,
    #[serde(rename = "_baggages")]
    pub baggages: Vec<Baggage>,
}

impl ListWithBaggages {
    /// Composes a list with its baggage, ordered by id ascending.
    pub fn new(list: List, mut baggages: Vec<Baggage>) -> Self {
        baggages.sort_by_key(|b| b.id);
        Self { list, baggages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn passport() -> Baggage {
        NewBaggage::new(1, "Passport").into_baggage(1)
    }

    #[test]
    fn test_baggage_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(passport()).unwrap();

        assert_eq!(
            value,
            json!({"id": 1, "listId": 1, "name": "Passport", "isChecked": false})
        );
    }

    #[test]
    fn test_baggage_is_checked_defaults_to_false() {
        let baggage: Baggage =
            serde_json::from_str(r#"{"id": 3, "listId": 2, "name": "Socks"}"#).unwrap();

        assert!(!baggage.is_checked);
    }

    #[test]
    fn test_list_with_baggages_flattens_list_fields() {
        let list = NewList::new("Trip").into_list(1);
        let composed = ListWithBaggages::new(list, vec![passport().with_checked(true)]);

        let value = serde_json::to_value(&composed).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Trip",
                "_baggages": [
                    {"id": 1, "listId": 1, "name": "Passport", "isChecked": true}
                ]
            })
        );
    }

    #[test]
    fn test_list_with_baggages_empty_set_is_an_array() {
        let list = NewList::new("Empty").into_list(7);
        let value = serde_json::to_value(ListWithBaggages::new(list, Vec::new())).unwrap();

        assert_eq!(value["_baggages"], json!([]));
    }

    #[test]
    fn test_list_with_baggages_orders_by_id() {
        let list = NewList::new("Trip").into_list(1);
        let baggages = vec![
            NewBaggage::new(1, "Tent").into_baggage(9),
            NewBaggage::new(1, "Map").into_baggage(2),
            NewBaggage::new(1, "Boots").into_baggage(5),
        ];

        let composed = ListWithBaggages::new(list, baggages);
        let ids: Vec<u64> = composed.baggages.iter().map(|b| b.id).collect();

        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_new_baggage_checked_builder() {
        let baggage = NewBaggage::new(4, "Charger").checked(true).into_baggage(11);

        assert_eq!(baggage.list_id, 4);
        assert!(baggage.is_checked);
    }
}
