//! Configuration for listo.
//!
//! Settings live in `config.json` inside the data directory (see
//! [`DataStorage`]). A missing file means defaults: CSV storage and the
//! reset policy for storage with an unexpected layout.
//!
//! ```json
//! {
//!   "backend": "sqlite",
//!   "schema_policy": "migrate"
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listo::libs::config::Config;
//!
//! let config = Config::read().unwrap();
//! let store = config.open_store().unwrap();
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::db::store::{SchemaPolicy, TaskStore};
use crate::db::task_file::{TaskFile, TASKS_FILE_NAME};
use crate::db::tasks::Tasks;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the task collection is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `tasks.csv`, one row per task.
    #[default]
    Csv,
    /// `listo.db`, one SQLite table.
    Sqlite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub schema_policy: SchemaPolicy,
    /// Directory the file was read from; never written.
    #[serde(skip)]
    data_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(backend: Backend, schema_policy: SchemaPolicy) -> Self {
        Config {
            backend,
            schema_policy,
            data_dir: None,
        }
    }

    /// Points this configuration at another data directory.
    pub fn in_dir(mut self, storage: &DataStorage) -> Self {
        self.data_dir = Some(storage.base_path().to_path_buf());
        self
    }

    /// Reads `config.json` from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(&config_file_path)?;
            serde_json::from_str::<Config>(&config_str).with_context(|| format!("Failed to parse {}", config_file_path.display()))?
        } else {
            Config::default()
        };
        config.data_dir = Some(storage.base_path().to_path_buf());

        Ok(config)
    }

    /// Location of `config.json` for this configuration.
    pub fn path(&self) -> Result<PathBuf> {
        Ok(self.storage().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = self.path()?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    fn storage(&self) -> DataStorage {
        match &self.data_dir {
            Some(dir) => DataStorage::at(dir.clone()),
            None => DataStorage::new(),
        }
    }

    /// Builds the store this configuration points at.
    pub fn open_store(&self) -> Result<Box<dyn TaskStore>> {
        let storage = self.storage();
        let store: Box<dyn TaskStore> = match self.backend {
            Backend::Csv => Box::new(TaskFile::new(storage.get_path(TASKS_FILE_NAME)?, self.schema_policy)),
            Backend::Sqlite => Box::new(Tasks::open(storage.get_path(DB_FILE_NAME)?, self.schema_policy)?),
        };
        Ok(store)
    }
}
