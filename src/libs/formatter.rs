//! Display strings for tasks.
//!
//! Due dates read relative to the moment of display: `Today, 09:00`,
//! `Tomorrow, 18:30`, or a full `16/10/2026 09:00` for anything else.
//! Priority shows as one `!` per level and flagged tasks carry a `★`.
//!
//! ## Examples
//!
//! ```rust
//! use listo::libs::formatter::format_due;
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let due = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert_eq!(format_due(due, now), "Today, 09:00");
//! ```

use crate::libs::filter::{classify_due, DueLabel};
use crate::libs::summary::Progress;
use crate::libs::task::Task;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIME_FORMAT: &str = "%H:%M";
pub const FULL_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A task with every column already rendered, ready for a table or an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTask {
    pub id: i64,
    pub title: String,
    pub list: String,
    pub due: String,
    pub notes: String,
    pub flagged: bool,
    pub done: bool,
    pub priority: u8,
}

impl FormattedTask {
    pub fn from_task(task: &Task, now: NaiveDateTime) -> Self {
        FormattedTask {
            id: task.id,
            title: format_title(task),
            list: task.category.clone(),
            due: task.due_date.map(|due| format_due(due, now)).unwrap_or_default(),
            notes: task.notes.clone().unwrap_or_default(),
            flagged: task.flagged,
            done: task.done,
            priority: task.priority.value(),
        }
    }
}

pub fn format_due(due: NaiveDateTime, now: NaiveDateTime) -> String {
    match classify_due(due, now) {
        DueLabel::Today(time) => format!("Today, {}", time.format(TIME_FORMAT)),
        DueLabel::Tomorrow(time) => format!("Tomorrow, {}", time.format(TIME_FORMAT)),
        DueLabel::Other(at) => at.format(FULL_FORMAT).to_string(),
    }
}

/// Title with priority marks in front and a star for flagged tasks.
pub fn format_title(task: &Task) -> String {
    let mut title = String::new();
    let glyphs = task.priority.glyphs();
    if !glyphs.is_empty() {
        title.push_str(&glyphs);
        title.push(' ');
    }
    title.push_str(&task.title);
    if task.flagged {
        title.push_str(" ★");
    }
    title
}

/// A text bar standing in for the done/pending chart, e.g. `[######----] 60%`.
pub fn format_progress(progress: &Progress, width: usize) -> String {
    let percent = progress.percent_done();
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    format!("[{}{}] {:.0}%", "#".repeat(filled), "-".repeat(width.saturating_sub(filled)), percent)
}
