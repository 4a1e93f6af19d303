//! View selection: which tasks a given view shows at a given instant.
//!
//! Everything here is a pure function of the task slice, the selector and
//! `now`. Views never reorder tasks; they keep the order of the working copy.
//! Phantom list markers are never shown.
//!
//! ## Usage
//!
//! ```rust
//! use listo::libs::filter::{visible_tasks, ViewSelector};
//! use chrono::Local;
//!
//! let selector: ViewSelector = "today".parse().unwrap();
//! let shown = visible_tasks(&[], &selector, Local::now().naive_local());
//! assert!(shown.is_empty());
//! ```

use crate::libs::task::Task;
use chrono::{Days, NaiveDateTime, NaiveTime};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix that forces the rest of a view name to be read as a list name.
pub const LIST_PREFIX: &str = "list:";

/// The view the user is looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewSelector {
    #[default]
    All,
    Today,
    Scheduled,
    Flagged,
    Overdue,
    Completed,
    Category(String),
}

impl ViewSelector {
    /// Whether `task` belongs in this view at `now`.
    pub fn matches(&self, task: &Task, now: NaiveDateTime) -> bool {
        if task.is_phantom() {
            return false;
        }
        match self {
            ViewSelector::All => !task.done,
            ViewSelector::Today => !task.done && task.due_date.is_some_and(|due| due.date() == now.date()),
            ViewSelector::Scheduled => !task.done && task.due_date.is_some_and(|due| due >= now),
            ViewSelector::Flagged => !task.done && task.flagged,
            ViewSelector::Overdue => !task.done && task.due_date.is_some_and(|due| due < now),
            ViewSelector::Completed => task.done,
            ViewSelector::Category(name) => !task.done && task.category == *name,
        }
    }

    /// Heading shown above the view.
    pub fn title(&self) -> String {
        match self {
            ViewSelector::All => "All".to_string(),
            ViewSelector::Today => "Today".to_string(),
            ViewSelector::Scheduled => "Scheduled".to_string(),
            ViewSelector::Flagged => "Flagged".to_string(),
            ViewSelector::Overdue => "Overdue".to_string(),
            ViewSelector::Completed => "Completed".to_string(),
            ViewSelector::Category(name) => name.clone(),
        }
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for ViewSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, name) = s.split_at(s.char_indices().nth(LIST_PREFIX.len()).map_or(s.len(), |(i, _)| i));
        if head.eq_ignore_ascii_case(LIST_PREFIX) {
            return Ok(ViewSelector::Category(name.trim().to_string()));
        }
        let selector = match s.to_ascii_lowercase().as_str() {
            "" | "all" => ViewSelector::All,
            "today" => ViewSelector::Today,
            "scheduled" => ViewSelector::Scheduled,
            "flagged" => ViewSelector::Flagged,
            "overdue" => ViewSelector::Overdue,
            "completed" | "done" => ViewSelector::Completed,
            _ => ViewSelector::Category(s.to_string()),
        };
        Ok(selector)
    }
}

/// Tasks visible in `selector` at `now`, in working-copy order.
pub fn visible_tasks(tasks: &[Task], selector: &ViewSelector, now: NaiveDateTime) -> Vec<Task> {
    tasks.iter().filter(|t| selector.matches(t, now)).cloned().collect()
}

/// Narrows a view to titles containing `query`, ignoring case.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }
    tasks.iter().filter(|t| t.title.to_lowercase().contains(&needle)).cloned().collect()
}

/// How a due date reads relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Today(NaiveTime),
    Tomorrow(NaiveTime),
    Other(NaiveDateTime),
}

pub fn classify_due(due: NaiveDateTime, now: NaiveDateTime) -> DueLabel {
    let today = now.date();
    if due.date() == today {
        DueLabel::Today(due.time())
    } else if today.checked_add_days(Days::new(1)) == Some(due.date()) {
        DueLabel::Tomorrow(due.time())
    } else {
        DueLabel::Other(due)
    }
}
