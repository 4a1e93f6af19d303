//! The storage contract shared by the CSV file and the SQLite database.
//!
//! Both backends hold the whole task collection and are always rewritten in
//! full. A backend must never leave half-written data behind: a failed
//! [`TaskStore::save_all`] leaves the previous durable state in place.

use crate::libs::error::TaskResult;
use crate::libs::task::Task;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Columns a stored collection must have to be readable as-is.
pub const REQUIRED_COLUMNS: [&str; 6] = ["id", "title", "category", "due_date", "flagged", "done"];

/// Columns added in later versions; filled with defaults when absent.
pub const OPTIONAL_COLUMNS: [&str; 2] = ["notes", "priority"];

/// Column order used when writing.
pub const COLUMNS: [&str; 8] = ["id", "title", "category", "due_date", "notes", "flagged", "done", "priority"];

/// What to do with storage that lacks a required column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Throw the old data away and start with empty storage.
    #[default]
    Reset,
    /// Add the missing columns with default values and keep the data.
    Migrate,
}

/// Durable home of the task collection.
pub trait TaskStore {
    /// Reads every record in stored order.
    ///
    /// Missing storage is a first run and yields an empty collection.
    fn load_all(&mut self) -> TaskResult<Vec<Task>>;

    /// Replaces the stored collection with `tasks`.
    fn save_all(&mut self, tasks: &[Task]) -> TaskResult<()>;

    /// Id for the next record: one past the largest id in `tasks`.
    fn next_id(&self, tasks: &[Task]) -> i64 {
        tasks.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1)
    }

    /// Where the data lives, for messages.
    fn location(&self) -> &Path;
}

/// Required columns absent from `present`.
pub fn missing_required<'a, S: AsRef<str>>(present: &[S]) -> Vec<&'a str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|p| p.as_ref().trim() == *column))
        .collect()
}
