use std::{env, fmt, path::Path, str::FromStr};

/// Storage backend used to persist lists and baggage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite database file (durable).
    Sqlite,
    /// Process memory (lost on restart).
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: sqlite)
    pub storage_backend: StorageBackend,
    /// Path to SQLite database file (default: "db/development.sqlite3")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - `sqlite` or `memory` (default: `sqlite`)
    /// - `SQLITE_PATH` - SQLite database path (default: "db/development.sqlite3")
    pub fn from_env() -> Self {
        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to sqlite storage");
                StorageBackend::Sqlite
            }),
            Err(_) => StorageBackend::Sqlite,
        };

        Self {
            storage_backend,
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "db/development.sqlite3".to_string()),
        }
    }

    /// Directory that must exist before the SQLite file can be opened.
    ///
    /// Returns `None` for in-memory databases and bare file names.
    pub fn sqlite_dir(&self) -> Option<&Path> {
        if self.sqlite_path == ":memory:" {
            return None;
        }
        Path::new(&self.sqlite_path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
