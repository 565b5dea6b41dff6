//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use baggages_core::packing::{Baggage, List, NewBaggage, NewList};
use baggages_core::storage::{BaggageRepository, ListRepository, RepositoryError, Result};

/// Rows of one table plus the last ID handed out.
///
/// IDs start at 1 and are never reused, matching SQLite `AUTOINCREMENT`.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory storage backend.
///
/// Uses `BTreeMap`s wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    lists: Arc<RwLock<Table<List>>>,
    baggages: Arc<RwLock<Table<Baggage>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListRepository for InMemoryRepository {
    async fn list_lists(&self) -> Result<Vec<List>> {
        let lists = self.lists.read().await;
        Ok(lists.rows.values().rev().cloned().collect())
    }

    async fn get_list(&self, id: u64) -> Result<Option<List>> {
        let lists = self.lists.read().await;
        Ok(lists.rows.get(&id).cloned())
    }

    async fn create_list(&self, list: &NewList) -> Result<List> {
        let mut lists = self.lists.write().await;
        let id = lists.next_id();
        let list = list.clone().into_list(id);
        lists.rows.insert(id, list.clone());
        Ok(list)
    }
}

#[async_trait]
impl BaggageRepository for InMemoryRepository {
    async fn get_baggages_by_list(&self, list_id: u64) -> Result<Vec<Baggage>> {
        let baggages = self.baggages.read().await;
        Ok(baggages
            .rows
            .values()
            .filter(|b| b.list_id == list_id)
            .cloned()
            .collect())
    }

    async fn get_baggage(&self, list_id: u64, id: u64) -> Result<Option<Baggage>> {
        let baggages = self.baggages.read().await;
        Ok(baggages
            .rows
            .get(&id)
            .filter(|b| b.list_id == list_id)
            .cloned())
    }

    async fn create_baggage(&self, baggage: &NewBaggage) -> Result<Baggage> {
        let mut baggages = self.baggages.write().await;
        let id = baggages.next_id();
        let baggage = baggage.clone().into_baggage(id);
        baggages.rows.insert(id, baggage.clone());
        Ok(baggage)
    }

    async fn update_baggage(&self, baggage: &Baggage) -> Result<()> {
        let mut baggages = self.baggages.write().await;
        match baggages.rows.get_mut(&baggage.id) {
            Some(stored) => {
                *stored = baggage.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("Baggage", baggage.id)),
        }
    }

    async fn delete_baggage(&self, id: u64) -> Result<()> {
        let mut baggages = self.baggages.write().await;
        if baggages.rows.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Baggage", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_lists_newest_first() {
        let repo = InMemoryRepository::new();
        repo.create_list(&NewList::new("Trip")).await.unwrap();
        repo.create_list(&NewList::new("Camping")).await.unwrap();

        let names: Vec<String> = repo
            .list_lists()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();

        assert_eq!(names, vec!["Camping", "Trip"]);
    }

    #[tokio::test]
    async fn test_get_baggage_requires_matching_list() {
        let repo = InMemoryRepository::new();
        let baggage = repo
            .create_baggage(&NewBaggage::new(1, "Passport"))
            .await
            .unwrap();

        assert_eq!(
            repo.get_baggage(1, baggage.id).await.unwrap(),
            Some(baggage.clone())
        );
        assert_eq!(repo.get_baggage(2, baggage.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_baggages_by_list_ordered_by_id() {
        let repo = InMemoryRepository::new();
        for name in ["Map", "Boots", "Tent"] {
            repo.create_baggage(&NewBaggage::new(1, name)).await.unwrap();
        }
        repo.create_baggage(&NewBaggage::new(2, "Other"))
            .await
            .unwrap();

        let ids: Vec<u64> = repo
            .get_baggages_by_list(1)
            .await
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_baggage() {
        let repo = InMemoryRepository::new();
        let ghost = NewBaggage::new(1, "Ghost").into_baggage(3);

        assert_eq!(
            repo.update_baggage(&ghost).await,
            Err(RepositoryError::not_found("Baggage", 3))
        );
        assert_eq!(
            repo.delete_baggage(3).await,
            Err(RepositoryError::not_found("Baggage", 3))
        );
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let first = repo
            .create_baggage(&NewBaggage::new(1, "Passport"))
            .await
            .unwrap();
        repo.delete_baggage(first.id).await.unwrap();

        let second = repo
            .create_baggage(&NewBaggage::new(1, "Visa"))
            .await
            .unwrap();

        assert_eq!(second.id, first.id + 1);
    }
}
