use std::env::{current_dir, var_os};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Overrides the data directory; otherwise the working directory is used.
pub const DATA_DIR_ENV: &str = "LISTO_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        Self { base_path }
    }

    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
