//! Database storage: the whole collection as rows of one `tasks` table.
//!
//! Saving replaces every row inside a single transaction, so readers see
//! either the old collection or the new one. The highest id ever saved is kept
//! in `meta.last_id`; [`Tasks::next_id`] never goes below it, which keeps the
//! id of a deleted task retired even after a restart.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::db::store::{SchemaPolicy, TaskStore};
//! use listo::db::tasks::Tasks;
//!
//! let mut tasks = Tasks::open("listo.db", SchemaPolicy::Reset).unwrap();
//! let all = tasks.load_all().unwrap();
//! tasks.save_all(&all).unwrap();
//! ```

use super::db::Db;
use super::migrations::{backfill_columns, reset_tasks_table, table_columns, SCHEMA_TASKS};
use super::store::{missing_required, SchemaPolicy, TaskStore};
use crate::libs::error::TaskResult;
use crate::libs::task::{repair_ids, RawTask, Task, MAX_ID};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SELECT_TASKS: &str = "SELECT id, title, category, due_date, notes, flagged, done, priority FROM tasks ORDER BY id";
const INSERT_TASK: &str =
    "INSERT INTO tasks (id, title, category, due_date, notes, flagged, done, priority) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const DELETE_TASKS: &str = "DELETE FROM tasks";
const SELECT_LAST_ID: &str = "SELECT value FROM meta WHERE key = 'last_id'";
const UPSERT_LAST_ID: &str = "INSERT INTO meta (key, value) VALUES ('last_id', ?1)
    ON CONFLICT(key) DO UPDATE SET value = MAX(value, excluded.value)";

pub struct Tasks {
    conn: Connection,
    path: PathBuf,
    policy: SchemaPolicy,
}

impl Tasks {
    pub fn open(path: impl Into<PathBuf>, policy: SchemaPolicy) -> TaskResult<Tasks> {
        let path = path.into();
        let db = Db::open(&path)?;

        Ok(Tasks { conn: db.conn, path, policy })
    }

    /// Highest id ever saved, `0` for a fresh database or an unusable mark.
    pub fn last_id(&self) -> TaskResult<i64> {
        let last: Option<i64> = self.conn.query_row(SELECT_LAST_ID, [], |row| row.get(0)).optional()?;
        match last {
            Some(last) if !(0..MAX_ID).contains(&last) => {
                warn!(last_id = last, "ignoring out-of-range id high-water mark");
                Ok(0)
            }
            last => Ok(last.unwrap_or(0)),
        }
    }

    /// Makes the `tasks` table readable, resetting or extending it as the
    /// schema policy says. Returns `false` when the table was reset.
    fn prepare_schema(&mut self) -> TaskResult<bool> {
        let columns = table_columns(&self.conn, "tasks")?;
        if columns.is_empty() {
            self.conn.execute(SCHEMA_TASKS, [])?;
            return Ok(true);
        }

        let missing = missing_required(&columns);
        if !missing.is_empty() {
            match self.policy {
                SchemaPolicy::Reset => {
                    warn!(path = %self.path.display(), missing = ?missing, "tasks table has an incompatible layout, resetting it");
                    reset_tasks_table(&mut self.conn)?;
                    return Ok(false);
                }
                SchemaPolicy::Migrate => {
                    info!(path = %self.path.display(), missing = ?missing, "filling missing task columns with defaults");
                }
            }
        }

        let added = backfill_columns(&mut self.conn, &columns)?;
        if !added.is_empty() {
            debug!(added = ?added, "added task columns");
        }
        Ok(true)
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Blob(_) => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
    }
}

fn raw_from_row(row: &Row) -> rusqlite::Result<RawTask> {
    Ok(RawTask {
        id: value_text(row.get(0)?),
        title: value_text(row.get(1)?),
        category: value_text(row.get(2)?),
        due_date: value_text(row.get(3)?),
        notes: value_text(row.get(4)?),
        flagged: value_text(row.get(5)?),
        done: value_text(row.get(6)?),
        priority: value_text(row.get(7)?),
    })
}

impl TaskStore for Tasks {
    fn load_all(&mut self) -> TaskResult<Vec<Task>> {
        if !self.prepare_schema()? {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let rows = stmt.query_map([], raw_from_row)?;
        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(Task::normalize(row?));
        }
        debug!(count = tasks.len(), "loaded tasks from database");

        Ok(repair_ids(tasks))
    }

    fn save_all(&mut self, tasks: &[Task]) -> TaskResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_TASKS, [])?;
        {
            let mut stmt = tx.prepare(INSERT_TASK)?;
            for task in tasks {
                let raw = task.to_raw();
                stmt.execute(params![
                    task.id,
                    task.title,
                    task.category,
                    raw.due_date,
                    task.notes,
                    task.flagged,
                    task.done,
                    i64::from(task.priority.value()),
                ])?;
            }
        }
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        tx.execute(UPSERT_LAST_ID, params![max_id])?;
        tx.commit()?;
        debug!(count = tasks.len(), "saved tasks to database");

        Ok(())
    }

    fn next_id(&self, tasks: &[Task]) -> i64 {
        let from_tasks = tasks.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1);
        match self.last_id() {
            Ok(last) => from_tasks.max(last.saturating_add(1)),
            Err(e) => {
                warn!(error = %e, "could not read the id high-water mark");
                from_tasks
            }
        }
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
