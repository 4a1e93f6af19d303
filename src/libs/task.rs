//! Task records and the rules that keep them well-formed.
//!
//! A [`Task`] is either a real task or a *phantom marker*: a record with an
//! empty title that is already done. Markers exist only so that a list with no
//! tasks still shows up among the known lists; they never appear in a view.
//!
//! ## Usage
//!
//! ```rust
//! use listo::libs::task::{NewTask, Priority};
//!
//! let draft = NewTask::new("Buy milk", "Errands").flagged(true).priority(2);
//! assert_eq!(draft.title, "Buy milk");
//! assert_eq!(Priority::clamped(7).value(), 3);
//! ```

use crate::libs::error::TaskError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Category every task falls back to when no list is given.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Canonical text form of a due date, sortable as plain text.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ids at or above this bound are treated as unreadable and reassigned.
pub const MAX_ID: i64 = 1 << 53;

/// Alternate date-time forms accepted when reading hand-edited storage.
const DATE_TIME_FALLBACKS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Task priority, `0` (none) to `3` (highest).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MAX: u8 = 3;

    /// Builds a priority from stored data, clamping out-of-range values.
    pub fn clamped(value: i64) -> Self {
        Priority(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One `!` per priority level, empty for no priority.
    pub fn glyphs(self) -> String {
        "!".repeat(self.0 as usize)
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(TaskError::Validation(format!("priority must be between 0 and {}, got {}", Self::MAX, value)))
        }
    }
}

/// A task as loaded into the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub due_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub flagged: bool,
    pub done: bool,
    pub priority: Priority,
}

/// A task exactly as it sits in storage, every field still text.
///
/// Column names double as the CSV header. Every field is optional so rows from
/// older files (no `priority`, no `notes`) still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub flagged: Option<String>,
    #[serde(default)]
    pub done: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl Task {
    /// Builds a task from raw storage text.
    ///
    /// Nothing here fails: a malformed date becomes "no deadline", a malformed
    /// flag becomes `false`, a malformed priority becomes `0`. An id that does
    /// not parse is left as `0` and fixed up by [`repair_ids`].
    pub fn normalize(raw: RawTask) -> Self {
        let id = raw
            .id
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|id| (1..MAX_ID).contains(id))
            .unwrap_or(0);
        let category = raw
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let priority = raw
            .priority
            .as_deref()
            .and_then(parse_number)
            .map(Priority::clamped)
            .unwrap_or_default();

        Task {
            id,
            title: raw.title.unwrap_or_default(),
            category,
            due_date: raw.due_date.as_deref().and_then(parse_due_date),
            notes: raw.notes.filter(|n| !n.is_empty()),
            flagged: raw.flagged.as_deref().and_then(parse_bool).unwrap_or(false),
            done: raw.done.as_deref().and_then(parse_bool).unwrap_or(false),
            priority,
        }
    }

    /// Marker that registers an otherwise empty list.
    pub fn phantom(id: i64, category: &str) -> Self {
        Task {
            id,
            title: String::new(),
            category: category.to_string(),
            due_date: None,
            notes: None,
            flagged: false,
            done: true,
            priority: Priority::default(),
        }
    }

    pub fn is_phantom(&self) -> bool {
        self.done && self.title.is_empty()
    }

    /// Text form written back to storage.
    pub fn to_raw(&self) -> RawTask {
        RawTask {
            id: Some(self.id.to_string()),
            title: Some(self.title.clone()),
            category: Some(self.category.clone()),
            due_date: self.due_date.map(|d| d.format(DATE_TIME_FORMAT).to_string()),
            notes: self.notes.clone(),
            flagged: Some(self.flagged.to_string()),
            done: Some(self.done.to_string()),
            priority: Some(self.priority.value().to_string()),
        }
    }
}

/// Fields of a task about to be created.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub category: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub flagged: bool,
    pub priority: Option<i64>,
}

impl NewTask {
    pub fn new(title: &str, category: &str) -> Self {
        NewTask {
            title: title.to_string(),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    pub fn due(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// How an update touches the due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueChange {
    /// Set a deadline; a missing time means midnight.
    Set { date: NaiveDate, time: Option<NaiveTime> },
    Clear,
}

impl DueChange {
    pub fn resolve(&self) -> Option<NaiveDateTime> {
        match self {
            DueChange::Set { date, time } => Some(whole_seconds(date.and_time(time.unwrap_or(NaiveTime::MIN)))),
            DueChange::Clear => None,
        }
    }
}

/// Partial update: `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub due: Option<DueChange>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
    pub flagged: Option<bool>,
    pub priority: Option<i64>,
}

/// Names of every list in use, without the default category.
pub fn known_categories(tasks: &[Task]) -> BTreeSet<String> {
    tasks
        .iter()
        .filter(|t| t.category != DEFAULT_CATEGORY)
        .map(|t| t.category.clone())
        .collect()
}

/// Gives every task with a missing or duplicate id a fresh one past the
/// current maximum. Earlier files assigned `row count + 1`, which collides
/// after a delete.
pub fn repair_ids(mut tasks: Vec<Task>) -> Vec<Task> {
    let mut next = tasks.iter().map(|t| t.id).max().unwrap_or(0).max(0).saturating_add(1);
    let mut seen = HashSet::new();
    for task in tasks.iter_mut() {
        if task.id <= 0 || !seen.insert(task.id) {
            tracing::warn!(old_id = task.id, new_id = next, "reassigning task id");
            task.id = next;
            seen.insert(next);
            next += 1;
        }
    }
    tasks
}

/// Drops sub-second precision, which the storage format does not keep.
pub fn whole_seconds(due: NaiveDateTime) -> NaiveDateTime {
    due.with_nanosecond(0).unwrap_or(due)
}

/// Parses a stored due date in any of the accepted forms.
pub fn parse_due_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        return Some(parsed);
    }
    for format in DATE_TIME_FALLBACKS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(|d| d.and_time(NaiveTime::MIN))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

// Spreadsheet round-trips turn `2` into `2.0`.
fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| text.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}
