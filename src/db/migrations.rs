//! Versioned schema for the SQLite backend.
//!
//! Each migration runs once, inside the same transaction as the bookkeeping
//! row that records it. Besides the forward migrations this module knows how
//! to inspect the `tasks` table of a database written by something else and
//! either reset it or add the columns it lacks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("listo.db").unwrap();
//! init_with_migrations(&mut conn).unwrap();
//! assert!(get_db_version(&conn).unwrap() > 0);
//! ```

use super::store::COLUMNS;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use crate::libs::task::DEFAULT_CATEGORY;
use crate::msg_debug;
use rusqlite::{params, Connection, Transaction};

/// Bookkeeping table: one row per applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

pub const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    category TEXT,
    due_date TEXT,
    notes TEXT,
    flagged INTEGER,
    done INTEGER,
    priority INTEGER
)";

/// Key-value table; `last_id` keeps the highest id ever handed out.
pub const SCHEMA_META: &str = "CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value INTEGER NOT NULL
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> TaskResult<()>,
}

/// Registry of every schema change, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the single task table
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(SCHEMA_TASKS, [])?;
            Ok(())
        });

        // Version 2: id high-water mark so deleted ids stay retired across sessions
        self.add_migration(2, "add_meta_table", |tx| {
            tx.execute(SCHEMA_META, [])?;
            tx.execute("INSERT OR IGNORE INTO meta (key, value) VALUES ('last_id', 0)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> TaskResult<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> TaskResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                tracing::error!(version = migration.version, error = %e, "migration failed");
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> TaskResult<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> TaskResult<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> TaskResult<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> TaskResult<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> TaskResult<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}

/// Column names of `table`, empty when the table does not exist.
pub fn table_columns(conn: &Connection, table: &str) -> TaskResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Drops whatever `tasks` table exists and recreates it empty.
pub fn reset_tasks_table(conn: &mut Connection) -> TaskResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DROP TABLE IF EXISTS tasks", [])?;
    tx.execute(SCHEMA_TASKS, [])?;
    tx.execute(SCHEMA_META, [])?;
    tx.execute("DELETE FROM meta", [])?;
    tx.execute("INSERT INTO meta (key, value) VALUES ('last_id', 0)", [])?;
    tx.commit()?;
    Ok(())
}

/// Adds every column of the current layout that `present` lacks.
///
/// Returns the names of the columns added.
pub fn backfill_columns(conn: &mut Connection, present: &[String]) -> TaskResult<Vec<&'static str>> {
    let missing: Vec<&'static str> = COLUMNS.iter().copied().filter(|c| !present.iter().any(|p| p == c)).collect();
    if missing.is_empty() {
        return Ok(missing);
    }

    let tx = conn.transaction()?;
    for column in &missing {
        tx.execute(&format!("ALTER TABLE tasks ADD COLUMN {}", column_definition(column)?), [])?;
    }
    // An added id column cannot be a primary key; seed it from the row id.
    if missing.contains(&"id") {
        tx.execute("UPDATE tasks SET id = rowid", [])?;
    }
    tx.commit()?;

    Ok(missing)
}

fn column_definition(column: &str) -> TaskResult<String> {
    let definition = match column {
        "id" => "id INTEGER".to_string(),
        "title" => "title TEXT NOT NULL DEFAULT ''".to_string(),
        "category" => format!("category TEXT DEFAULT '{}'", DEFAULT_CATEGORY),
        "due_date" => "due_date TEXT".to_string(),
        "notes" => "notes TEXT".to_string(),
        "flagged" => "flagged INTEGER DEFAULT 0".to_string(),
        "done" => "done INTEGER DEFAULT 0".to_string(),
        "priority" => "priority INTEGER DEFAULT 0".to_string(),
        other => return Err(TaskError::Storage(format!("unknown column '{}'", other))),
    };
    Ok(definition)
}
