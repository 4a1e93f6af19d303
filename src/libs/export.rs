//! Export of a task view to a file.
//!
//! A view (for example `Today` or a single list) is written out as CSV for
//! spreadsheets or as pretty-printed JSON. Unless a path is given the file is
//! named `listo_<view>_<YYYYMMDD_HHMMSS>.<ext>` in the current directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::libs::export::{ExportFormat, Exporter};
//! use chrono::Local;
//!
//! let exporter = Exporter::new(ExportFormat::Json, None, "today");
//! exporter.export(&[], Local::now().naive_local()).unwrap();
//! ```

use crate::libs::formatter::FormattedTask;
use crate::libs::task::{Task, DATE_TIME_FORMAT};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported task. `due_date` keeps the sortable form, `due` the
/// human-readable one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub list: String,
    pub due_date: String,
    pub due: String,
    pub notes: String,
    pub flagged: bool,
    pub done: bool,
    pub priority: u8,
}

impl ExportTask {
    pub fn from_task(task: &Task, now: NaiveDateTime) -> Self {
        let formatted = FormattedTask::from_task(task, now);
        ExportTask {
            id: task.id,
            title: task.title.clone(),
            list: formatted.list,
            due_date: task.due_date.map(|d| d.format(DATE_TIME_FORMAT).to_string()).unwrap_or_default(),
            due: formatted.due,
            notes: formatted.notes,
            flagged: task.flagged,
            done: task.done,
            priority: formatted.priority,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, view_name: &str) -> Self {
        let slug: String = view_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        let default_name = format!("listo_{}_{}", slug, Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` and returns the path written.
    pub fn export(&self, tasks: &[Task], now: NaiveDateTime) -> Result<PathBuf> {
        let rows: Vec<ExportTask> = tasks.iter().map(|t| ExportTask::from_task(t, now)).collect();
        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
        }
        tracing::debug!(count = rows.len(), path = %self.output_path.display(), "tasks exported");
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportTask]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
