//! # Listo - a small task list
//!
//! Tasks with an optional due date, notes, flag and priority, filed under
//! named lists and kept in a CSV file or a SQLite database.
//!
//! ## Features
//!
//! - **Smart views**: All, Today, Scheduled, Flagged, Overdue, Completed and one view per list
//! - **Two backends**: `tasks.csv` or `listo.db`, chosen in `config.json`
//! - **Safe writes**: every change rewrites the whole collection atomically
//! - **Schema handling**: reset or migrate storage written by older versions
//! - **Export**: any view as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
