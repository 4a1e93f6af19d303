//! Text for every [`Message`] shown to the user.
//!
//! All user-facing wording lives here so commands only deal in message
//! variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task '{}' created with ID {}", title, id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} marked as done", id),
            Message::TaskReopened(id) => format!("Task {} marked as not done", id),
            Message::NothingToUpdate => "Nothing to update: pass at least one field to change.".to_string(),
            Message::TimeNeedsDate => "A due time needs a due date: pass --due as well.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Nothing deleted.".to_string(),
            Message::ViewHeader(view, count) => format!("{} ({})", view, count),
            Message::NoTasksInView(view) => format!("No tasks in {}.", view),
            Message::OperationFailed(reason) => reason.clone(),

            // === LIST MESSAGES ===
            Message::ListCreated(name) => format!("List '{}' created", name),
            Message::ListRenamed(old, new) => format!("List '{}' renamed to '{}'", old, new),
            Message::ListDeleted(name, moved) => format!("List '{}' deleted, {} task(s) moved to the default list", name, moved),
            Message::ListsHeader => "Lists".to_string(),
            Message::NoListsFound => "No lists yet. Create one with `listo lists new <name>`.".to_string(),
            Message::ConfirmDeleteList(name) => format!("Delete list '{}'? Its tasks will be kept.", name),

            // === SUMMARY MESSAGES ===
            Message::ProgressHeader => "Progress".to_string(),
            Message::SmartViewsHeader => "Views".to_string(),
            Message::NoTasksYet => "No tasks yet.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Exported to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::StorageLocation(path) => format!("Tasks are stored in {}", path),
            Message::BackendChanged(old) => format!("Tasks kept in the {} backend are not copied over", old),

            // === DATABASE MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
        };
        write!(f, "{}", text)
    }
}
