//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached only through repository trait
//! objects, so handlers never know which backend is active.

use std::sync::Arc;

use baggages_core::storage::{BaggageRepository, ListRepository};

use crate::{
    config::{Config, StorageBackend},
    storage::{InMemoryRepository, SqliteRepository},
};

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// List repository.
    pub list_repo: Arc<dyn ListRepository>,
    /// Baggage repository.
    pub baggage_repo: Arc<dyn BaggageRepository>,
}

impl AppState {
    /// Creates an AppState from explicit repositories.
    pub fn from_repos(
        list_repo: Arc<dyn ListRepository>,
        baggage_repo: Arc<dyn BaggageRepository>,
    ) -> Self {
        Self {
            list_repo,
            baggage_repo,
        }
    }

    /// Creates an AppState where one backend serves both repositories.
    pub fn with_repository<R>(repo: Arc<R>) -> Self
    where
        R: ListRepository + BaggageRepository + 'static,
    {
        Self::from_repos(repo.clone(), repo)
    }

    /// Creates AppState for the backend selected in `config`.
    ///
    /// For SQLite this opens the database file (creating its directory and
    /// the tables when missing).
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        match config.storage_backend {
            StorageBackend::Sqlite => {
                if let Some(dir) = config.sqlite_dir() {
                    std::fs::create_dir_all(dir)?;
                }
                let repo = SqliteRepository::new(&config.sqlite_path).await?;
                tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
                Ok(Self::with_repository(Arc::new(repo)))
            }
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
            }
        }
    }
}

impl Default for AppState {
    /// Empty in-memory state.
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baggages_core::packing::NewList;

    #[tokio::test]
    async fn test_repositories_share_one_backend() {
        let state = AppState::default();

        let list = state
            .list_repo
            .create_list(&NewList::new("Trip"))
            .await
            .unwrap();

        assert_eq!(
            state.list_repo.get_list(list.id).await.unwrap(),
            Some(list)
        );
    }

    #[tokio::test]
    async fn test_new_with_in_memory_sqlite() {
        let config = Config {
            storage_backend: StorageBackend::Sqlite,
            sqlite_path: ":memory:".to_string(),
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.list_repo.list_lists().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_creates_missing_sqlite_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("development.sqlite3");
        let config = Config {
            storage_backend: StorageBackend::Sqlite,
            sqlite_path: path.to_string_lossy().into_owned(),
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.list_repo.list_lists().await.unwrap().is_empty());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_new_fails_when_sqlite_path_cannot_be_opened() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the database directory should be
        let blocker = dir.path().join("db");
        std::fs::write(&blocker, b"").unwrap();
        let config = Config {
            storage_backend: StorageBackend::Sqlite,
            sqlite_path: blocker
                .join("development.sqlite3")
                .to_string_lossy()
                .into_owned(),
        };

        assert!(AppState::new(&config).await.is_err());
    }
}
