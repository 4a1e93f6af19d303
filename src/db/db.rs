use super::migrations::init_with_migrations;
use crate::libs::error::TaskResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "listo.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database at `path` and brings its schema up to date.
    pub fn open(path: &Path) -> TaskResult<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_without_migrations(path: &Path) -> TaskResult<Connection> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Connection::open(path)?)
    }
}
