use async_trait::async_trait;

use crate::packing::{Baggage, List, NewBaggage, NewList};

use super::Result;

/// Repository for list operations.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Gets every list, newest (highest id) first.
    async fn list_lists(&self) -> Result<Vec<List>>;

    /// Gets a list by its ID.
    async fn get_list(&self, id: u64) -> Result<Option<List>>;

    /// Stores a new list and returns it with its assigned ID.
    async fn create_list(&self, list: &NewList) -> Result<List>;
}

/// Repository for baggage operations.
#[async_trait]
pub trait BaggageRepository: Send + Sync {
    /// Gets all baggage of a list, ordered by ID ascending.
    async fn get_baggages_by_list(&self, list_id: u64) -> Result<Vec<Baggage>>;

    /// Gets a baggage by its ID, only if it belongs to `list_id`.
    async fn get_baggage(&self, list_id: u64, id: u64) -> Result<Option<Baggage>>;

    /// Stores a new baggage and returns it with its assigned ID.
    async fn create_baggage(&self, baggage: &NewBaggage) -> Result<Baggage>;

    /// Persists every field of an existing baggage.
    async fn update_baggage(&self, baggage: &Baggage) -> Result<()>;

    /// Deletes a baggage by its ID.
    async fn delete_baggage(&self, id: u64) -> Result<()>;
}
