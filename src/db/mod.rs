//! Storage layer for listo.
//!
//! The task collection can live in a CSV file or in an SQLite database. Both
//! implement [`store::TaskStore`] and are interchangeable from the caller's
//! side: load the whole collection, save the whole collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::db::store::{SchemaPolicy, TaskStore};
//! use listo::db::task_file::TaskFile;
//!
//! let mut store = TaskFile::new("tasks.csv", SchemaPolicy::Reset);
//! let tasks = store.load_all().unwrap();
//! ```

/// SQLite connection handling.
pub mod db;

/// Versioned SQLite schema and legacy-table repair.
pub mod migrations;

/// The backend-independent storage contract.
pub mod store;

/// CSV file backend.
pub mod task_file;

/// SQLite backend.
pub mod tasks;
