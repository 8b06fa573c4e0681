//! Warehouse session management.
//!
//! A session owns one DuckDB connection and one open transaction. The
//! transaction begins on connect so that truncates and inserts across
//! both datasets stage together; nothing is durable until
//! [`Session::commit`]. Dropping an uncommitted session rolls the
//! transaction back and closes the connection, so every exit path
//! releases the resource.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ::duckdb::Connection;
use thiserror::Error;

use crate::config::Settings;

/// Failure to open the session or start its transaction.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to open database '{database}': {source}")]
    Open {
        database: String,
        #[source]
        source: ::duckdb::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An open, commit-pending session against the warehouse.
pub struct Session {
    connection: Connection,
    committed: bool,
}

impl Session {
    /// Open the database named by the settings and begin the load
    /// transaction.
    ///
    /// The database file lives under the data home (`EQUILOAD_HOME`,
    /// falling back to `$HOME/.equiload`); parent directories are
    /// created as needed. Tables are not: the loader assumes the RAW
    /// schema pre-exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the file cannot be opened or the
    /// transaction cannot be started.
    pub fn connect(settings: &Settings) -> Result<Self, ConnectionError> {
        let db_path = resolve_db_path(settings.database.as_str());
        Self::connect_at(settings, db_path)
    }

    /// Open the session against an explicit database file path.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Session::connect`].
    pub fn connect_at(
        settings: &Settings,
        db_path: impl AsRef<Path>,
    ) -> Result<Self, ConnectionError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let wrap = |source| ConnectionError::Open {
            database: settings.database.clone(),
            source,
        };
        let connection = Connection::open(db_path).map_err(wrap)?;
        connection.execute_batch("BEGIN TRANSACTION").map_err(wrap)?;

        Ok(Self {
            connection,
            committed: false,
        })
    }

    /// Run one or more SQL statements on the open transaction.
    ///
    /// # Errors
    ///
    /// Returns the engine error from the first failing statement.
    pub fn execute_batch(&self, sql: &str) -> Result<(), ::duckdb::Error> {
        self.connection.execute_batch(sql)
    }

    /// Commit the load transaction and release the session.
    ///
    /// # Errors
    ///
    /// Returns the engine error if the commit fails; the session is
    /// still released (with a rollback attempt) in that case.
    pub fn commit(mut self) -> Result<(), ::duckdb::Error> {
        self.connection.execute_batch("COMMIT")?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.committed {
            let _ = self.connection.execute_batch("ROLLBACK");
        }
    }
}

fn resolve_db_path(database: &str) -> PathBuf {
    resolve_data_home().join(format!("{database}.duckdb"))
}

fn resolve_data_home() -> PathBuf {
    if let Some(path) = env::var_os("EQUILOAD_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".equiload");
    }

    PathBuf::from(".equiload")
}
