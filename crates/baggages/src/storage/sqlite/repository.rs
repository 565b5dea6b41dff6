//! SQLite repository implementation.
//!
//! Implements the repository traits from `baggages_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use baggages_core::packing::{Baggage, List, NewBaggage, NewList};
use baggages_core::storage::{BaggageRepository, ListRepository, RepositoryError, Result};

use super::conversions::{id_from_sql, id_to_sql, row_to_baggage, row_to_list};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single `tokio-rusqlite` connection thread.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ListRepository implementation
// ============================================================================

#[async_trait]
impl ListRepository for SqliteRepository {
    async fn list_lists(&self) -> Result<Vec<List>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_LISTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_list).map_err(wrap_err)?;

                let mut lists = Vec::new();
                for row_result in rows {
                    lists.push(row_result.map_err(wrap_err)?);
                }
                Ok(lists)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "List", ""))
    }

    async fn get_list(&self, id: u64) -> Result<Option<List>> {
        let Some(sql_id) = id_to_sql(id) else {
            return Ok(None);
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_LIST_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([sql_id], row_to_list) {
                    Ok(list) => Ok(Some(list)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "List", id.to_string()))
    }

    async fn create_list(&self, list: &NewList) -> Result<List> {
        let name = list.name.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_LIST, [&name])
                    .map_err(wrap_err)?;
                id_from_sql(0, conn.last_insert_rowid()).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "List", ""))?;

        Ok(list.clone().into_list(id))
    }
}

// ============================================================================
// BaggageRepository implementation
// ============================================================================

#[async_trait]
impl BaggageRepository for SqliteRepository {
    async fn get_baggages_by_list(&self, list_id: u64) -> Result<Vec<Baggage>> {
        let Some(sql_list_id) = id_to_sql(list_id) else {
            return Ok(Vec::new());
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BAGGAGES_BY_LIST)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([sql_list_id], row_to_baggage)
                    .map_err(wrap_err)?;

                let mut baggages = Vec::new();
                for row_result in rows {
                    baggages.push(row_result.map_err(wrap_err)?);
                }
                Ok(baggages)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Baggage", ""))
    }

    async fn get_baggage(&self, list_id: u64, id: u64) -> Result<Option<Baggage>> {
        let (Some(sql_id), Some(sql_list_id)) = (id_to_sql(id), id_to_sql(list_id)) else {
            return Ok(None);
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BAGGAGE_BY_ID_AND_LIST)
                    .map_err(wrap_err)?;
                match stmt.query_row([sql_id, sql_list_id], row_to_baggage) {
                    Ok(baggage) => Ok(Some(baggage)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Baggage", id.to_string()))
    }

    async fn create_baggage(&self, baggage: &NewBaggage) -> Result<Baggage> {
        let list_id = id_to_sql(baggage.list_id).ok_or_else(|| {
            RepositoryError::InvalidData(format!("List id out of range: {}", baggage.list_id))
        })?;
        let name = baggage.name.clone();
        let is_checked = baggage.is_checked;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_BAGGAGE,
                    rusqlite::params![list_id, name, is_checked],
                )
                .map_err(wrap_err)?;
                id_from_sql(0, conn.last_insert_rowid()).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Baggage", ""))?;

        Ok(baggage.clone().into_baggage(id))
    }

    async fn update_baggage(&self, baggage: &Baggage) -> Result<()> {
        let Some(id) = id_to_sql(baggage.id) else {
            return Err(RepositoryError::not_found("Baggage", baggage.id));
        };
        let list_id = id_to_sql(baggage.list_id).ok_or_else(|| {
            RepositoryError::InvalidData(format!("List id out of range: {}", baggage.list_id))
        })?;
        let name = baggage.name.clone();
        let is_checked = baggage.is_checked;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_BAGGAGE,
                        rusqlite::params![id, list_id, name, is_checked],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Baggage", baggage.id.to_string()))
    }

    async fn delete_baggage(&self, id: u64) -> Result<()> {
        let Some(sql_id) = id_to_sql(id) else {
            return Err(RepositoryError::not_found("Baggage", id));
        };

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_BAGGAGE, [sql_id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Baggage", id.to_string()))
    }
}
