//! The working copy and every operation that changes it.
//!
//! A [`Workspace`] loads the collection once, holds it as the only writable
//! copy for the session, and writes the whole collection back after each
//! change. Operations build the next collection first and only adopt it once
//! the store has accepted it, so a failed save leaves memory and disk in
//! agreement.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::db::store::SchemaPolicy;
//! use listo::db::task_file::TaskFile;
//! use listo::libs::task::NewTask;
//! use listo::libs::workspace::Workspace;
//!
//! let store = TaskFile::new("tasks.csv", SchemaPolicy::Reset);
//! let mut workspace = Workspace::load(Box::new(store)).unwrap();
//! let task = workspace.create_task(NewTask::new("Buy milk", "Errands")).unwrap();
//! workspace.toggle_done(task.id, true).unwrap();
//! ```

use crate::db::store::TaskStore;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::filter::{visible_tasks, ViewSelector};
use crate::libs::task::{known_categories, whole_seconds, NewTask, Priority, Task, TaskUpdate, DEFAULT_CATEGORY};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use tracing::debug;

pub struct Workspace {
    store: Box<dyn TaskStore>,
    tasks: Vec<Task>,
    /// Highest id seen this session, loaded or assigned.
    last_id: i64,
}

impl Workspace {
    /// Loads the collection from `store` and takes ownership of both.
    pub fn load(mut store: Box<dyn TaskStore>) -> TaskResult<Self> {
        let tasks = store.load_all()?;
        let last_id = (store.next_id(&tasks) - 1).max(0);
        debug!(count = tasks.len(), last_id, location = %store.location().display(), "workspace loaded");

        Ok(Workspace { store, tasks, last_id })
    }

    /// Every record, phantom markers included, in stored order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// A real task by id; markers are not tasks.
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id && !t.is_phantom())
    }

    pub fn view(&self, selector: &ViewSelector, now: NaiveDateTime) -> Vec<Task> {
        visible_tasks(&self.tasks, selector, now)
    }

    pub fn known_categories(&self) -> BTreeSet<String> {
        known_categories(&self.tasks)
    }

    pub fn create_task(&mut self, draft: NewTask) -> TaskResult<Task> {
        let title = required_text(&draft.title, "task title")?;
        let priority = match draft.priority {
            Some(value) => Priority::try_from(value)?,
            None => Priority::default(),
        };
        let category = draft.category.as_deref().map(category_or_default).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let task = Task {
            id: self.allocate_id(),
            title,
            category,
            due_date: draft.due_date.map(whole_seconds),
            notes: draft.notes.filter(|n| !n.trim().is_empty()),
            flagged: draft.flagged,
            done: false,
            priority,
        };

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        debug!(id = task.id, category = %task.category, "task created");

        Ok(task)
    }

    /// Makes an empty list visible by storing a marker for it.
    pub fn register_category(&mut self, name: &str) -> TaskResult<()> {
        let name = self.new_category_name(name)?;

        let mut next = self.tasks.clone();
        next.push(Task::phantom(self.allocate_id(), &name));
        self.commit(next)?;
        debug!(category = %name, "list registered");

        Ok(())
    }

    /// Sets the done state; does nothing, not even a save, if it already holds.
    pub fn toggle_done(&mut self, id: i64, done: bool) -> TaskResult<()> {
        let index = self.index_of(id)?;
        if self.tasks[index].done == done {
            debug!(id, done, "done state unchanged, nothing to save");
            return Ok(());
        }

        let mut next = self.tasks.clone();
        next[index].done = done;
        self.commit(next)
    }

    /// Changes only the fields present in `update`.
    pub fn update_task(&mut self, id: i64, update: TaskUpdate) -> TaskResult<()> {
        let index = self.index_of(id)?;
        let mut task = self.tasks[index].clone();

        if let Some(title) = update.title {
            task.title = required_text(&title, "task title")?;
        }
        if let Some(category) = update.category {
            task.category = category_or_default(&category);
        }
        if let Some(due) = update.due {
            task.due_date = due.resolve();
        }
        if let Some(notes) = update.notes {
            task.notes = notes.filter(|n| !n.trim().is_empty());
        }
        if let Some(flagged) = update.flagged {
            task.flagged = flagged;
        }
        if let Some(priority) = update.priority {
            task.priority = Priority::try_from(priority)?;
        }

        if task == self.tasks[index] {
            debug!(id, "update changes nothing, nothing to save");
            return Ok(());
        }

        let mut next = self.tasks.clone();
        next[index] = task;
        self.commit(next)
    }

    pub fn delete_task(&mut self, id: i64) -> TaskResult<()> {
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)?;
        debug!(id, "task deleted");

        Ok(())
    }

    /// Moves a list, its marker and all its tasks, to a new name.
    pub fn rename_category(&mut self, old: &str, new: &str) -> TaskResult<()> {
        let old = self.existing_category(old)?;
        let new = self.new_category_name(new)?;

        let next = self
            .tasks
            .iter()
            .cloned()
            .map(|mut t| {
                if t.category == old {
                    t.category = new.clone();
                }
                t
            })
            .collect();
        self.commit(next)
    }

    /// Removes a list. Its tasks move to the default category.
    ///
    /// Returns how many tasks were moved.
    pub fn delete_category(&mut self, name: &str) -> TaskResult<usize> {
        let name = self.existing_category(name)?;

        let mut moved = 0;
        let next = self
            .tasks
            .iter()
            .filter(|t| !(t.is_phantom() && t.category == name))
            .cloned()
            .map(|mut t| {
                if t.category == name {
                    t.category = DEFAULT_CATEGORY.to_string();
                    moved += 1;
                }
                t
            })
            .collect();
        self.commit(next)?;

        Ok(moved)
    }

    fn index_of(&self, id: i64) -> TaskResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id && !t.is_phantom())
            .ok_or(TaskError::NotFound(id))
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.store.next_id(&self.tasks).max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    fn existing_category(&self, name: &str) -> TaskResult<String> {
        let name = name.trim();
        if self.known_categories().contains(name) {
            Ok(name.to_string())
        } else {
            Err(TaskError::CategoryNotFound(name.to_string()))
        }
    }

    fn new_category_name(&self, name: &str) -> TaskResult<String> {
        let name = required_text(name, "list name")?;
        if name == DEFAULT_CATEGORY {
            return Err(TaskError::Validation(format!("'{}' is reserved", DEFAULT_CATEGORY)));
        }
        if self.known_categories().contains(&name) {
            return Err(TaskError::Validation(format!("list '{}' already exists", name)));
        }
        Ok(name)
    }

    /// Persists `next` and adopts it as the working copy.
    fn commit(&mut self, next: Vec<Task>) -> TaskResult<()> {
        self.store.save_all(&next)?;
        self.tasks = next;
        Ok(())
    }
}

fn required_text(value: &str, what: &str) -> TaskResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaskError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(value.to_string())
}

fn category_or_default(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        name.to_string()
    }
}
