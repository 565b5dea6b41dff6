//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Column order in every SELECT matches the row
//! conversion functions in `conversions`.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Lists table
CREATE TABLE IF NOT EXISTS lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Baggages table (list_id is checked by handlers, not by a foreign key)
CREATE TABLE IF NOT EXISTS baggages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    is_checked INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_baggages_list_id ON baggages(list_id);
"#;

// List queries
pub const SELECT_LISTS: &str = r#"
SELECT id, name
FROM lists
ORDER BY id DESC
"#;

pub const SELECT_LIST_BY_ID: &str = r#"
SELECT id, name
FROM lists
WHERE id = ?1
LIMIT 1
"#;

pub const INSERT_LIST: &str = r#"
INSERT INTO lists (name)
VALUES (?1)
"#;

// Baggage queries
pub const SELECT_BAGGAGES_BY_LIST: &str = r#"
SELECT id, list_id, name, is_checked
FROM baggages
WHERE list_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_BAGGAGE_BY_ID_AND_LIST: &str = r#"
SELECT id, list_id, name, is_checked
FROM baggages
WHERE id = ?1 AND list_id = ?2
LIMIT 1
"#;

pub const INSERT_BAGGAGE: &str = r#"
INSERT INTO baggages (list_id, name, is_checked)
VALUES (?1, ?2, ?3)
"#;

pub const UPDATE_BAGGAGE: &str = r#"
UPDATE baggages
SET list_id = ?2, name = ?3, is_checked = ?4
WHERE id = ?1
"#;

pub const DELETE_BAGGAGE: &str = r#"
DELETE FROM baggages
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS lists"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS baggages"));
        assert!(CREATE_TABLES.contains("CREATE INDEX IF NOT EXISTS"));
    }

    #[test]
    fn test_queries_order_rows() {
        assert!(SELECT_LISTS.contains("ORDER BY id DESC"));
        assert!(SELECT_BAGGAGES_BY_LIST.contains("ORDER BY id ASC"));
        assert!(SELECT_BAGGAGE_BY_ID_AND_LIST.contains("list_id = ?2"));
    }
}
