//! SQLite row conversion functions.
//!
//! Explicit, field-by-field mapping between SQLite rows and domain types.

use baggages_core::packing::{Baggage, List};
use rusqlite::{types::Type, Row};

/// Convert a SQLite row to a List.
///
/// Expected columns: id, name
pub fn row_to_list(row: &Row) -> rusqlite::Result<List> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;

    Ok(List {
        id: id_from_sql(0, id)?,
        name,
    })
}

/// Convert a SQLite row to a Baggage.
///
/// Expected columns: id, list_id, name, is_checked
pub fn row_to_baggage(row: &Row) -> rusqlite::Result<Baggage> {
    let id: i64 = row.get(0)?;
    let list_id: i64 = row.get(1)?;
    let name: String = row.get(2)?;
    let is_checked: bool = row.get(3)?;

    Ok(Baggage {
        id: id_from_sql(0, id)?,
        list_id: id_from_sql(1, list_id)?,
        name,
        is_checked,
    })
}

/// Convert a domain ID into a SQLite integer.
///
/// Returns `None` for IDs above `i64::MAX`; SQLite never assigns those,
/// so no stored row can match them.
pub fn id_to_sql(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Convert a SQLite integer ID (e.g. `last_insert_rowid`) into a domain ID.
pub fn id_from_sql(column: usize, id: i64) -> rusqlite::Result<u64> {
    u64::try_from(id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Integer, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(super::super::schema::CREATE_TABLES)
            .unwrap();
        conn
    }

    #[test]
    fn test_row_to_list() {
        let conn = setup();
        conn.execute("INSERT INTO lists (name) VALUES ('Trip')", [])
            .unwrap();

        let list = conn
            .query_row("SELECT id, name FROM lists", [], row_to_list)
            .unwrap();

        assert_eq!(
            list,
            List {
                id: 1,
                name: "Trip".to_string()
            }
        );
    }

    #[test]
    fn test_row_to_baggage_reads_boolean_column() {
        let conn = setup();
        conn.execute(
            "INSERT INTO baggages (list_id, name, is_checked) VALUES (3, 'Passport', 1)",
            [],
        )
        .unwrap();

        let baggage = conn
            .query_row(
                "SELECT id, list_id, name, is_checked FROM baggages",
                [],
                row_to_baggage,
            )
            .unwrap();

        assert_eq!(baggage.id, 1);
        assert_eq!(baggage.list_id, 3);
        assert_eq!(baggage.name, "Passport");
        assert!(baggage.is_checked);
    }

    #[test]
    fn test_negative_id_is_a_conversion_failure() {
        let result = id_from_sql(0, -5);

        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, _))
        ));
    }

    #[test]
    fn test_id_to_sql_rejects_out_of_range_ids() {
        assert_eq!(id_to_sql(42), Some(42));
        assert_eq!(id_to_sql(u64::MAX), None);
    }
}
