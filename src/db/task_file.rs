//! Flat-file storage: the whole collection as one CSV table.
//!
//! The file has a header row (`id,title,category,due_date,notes,flagged,done,priority`),
//! due dates in `YYYY-MM-DD HH:MM:SS` and booleans as `true`/`false`. Saves go
//! to a temporary file next to the target which is then renamed over it, so a
//! crash mid-write never leaves a truncated table.

use super::store::{missing_required, SchemaPolicy, TaskStore, COLUMNS};
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{repair_ids, RawTask, Task};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const TASKS_FILE_NAME: &str = "tasks.csv";

pub struct TaskFile {
    path: PathBuf,
    policy: SchemaPolicy,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>, policy: SchemaPolicy) -> Self {
        TaskFile { path: path.into(), policy }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self.path.file_name().and_then(|n| n.to_str()).unwrap_or(TASKS_FILE_NAME);
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        dir.join(format!(".{}.tmp.{}", name, std::process::id()))
    }

    fn write_to(&self, target: &Path, tasks: &[Task]) -> TaskResult<()> {
        let file = File::create(target)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(COLUMNS)?;
        for task in tasks {
            let raw = task.to_raw();
            writer.write_record([
                raw.id.unwrap_or_default(),
                raw.title.unwrap_or_default(),
                raw.category.unwrap_or_default(),
                raw.due_date.unwrap_or_default(),
                raw.notes.unwrap_or_default(),
                raw.flagged.unwrap_or_default(),
                raw.done.unwrap_or_default(),
                raw.priority.unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| TaskError::Storage(e.to_string()))?;
        file.sync_all()?;
        Ok(())
    }
}

impl TaskStore for TaskFile {
    fn load_all(&mut self) -> TaskResult<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file not found, starting empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::Headers).from_path(&self.path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            debug!(path = %self.path.display(), "task file is empty");
            return Ok(Vec::new());
        }

        let missing = missing_required(&headers);
        if !missing.is_empty() {
            match self.policy {
                SchemaPolicy::Reset => {
                    warn!(path = %self.path.display(), missing = ?missing, "task file has an incompatible layout, resetting it");
                    drop(reader);
                    self.save_all(&[])?;
                    return Ok(Vec::new());
                }
                SchemaPolicy::Migrate => {
                    info!(path = %self.path.display(), missing = ?missing, "filling missing task columns with defaults");
                }
            }
        }

        let mut tasks = Vec::new();
        for row in reader.deserialize::<RawTask>() {
            tasks.push(Task::normalize(row?));
        }
        debug!(count = tasks.len(), "loaded tasks from file");
        Ok(repair_ids(tasks))
    }

    fn save_all(&mut self, tasks: &[Task]) -> TaskResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let temp = self.temp_path();
        if let Err(err) = self.write_to(&temp, tasks) {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }
        debug!(count = tasks.len(), path = %self.path.display(), "saved tasks to file");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
