//! Core library modules for listo.
//!
//! - **Model**: [`task`] records, [`error`] types
//! - **Views**: [`filter`] selection, [`summary`] counts, [`formatter`] and [`view`] rendering
//! - **Mutation**: [`workspace`], the working copy and its operations
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`export`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::libs::config::Config;
//! use listo::libs::task::NewTask;
//! use listo::libs::workspace::Workspace;
//!
//! let store = Config::read()?.open_store()?;
//! let mut workspace = Workspace::load(store)?;
//! workspace.create_task(NewTask::new("Buy milk", "Errands"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod summary;
pub mod task;
pub mod view;
pub mod workspace;
