//! Connection lifecycle management
//!
//! Every unit of work (one HTTP request, one dashboard run) gets its own
//! connection, opened immediately before use and closed on every exit path.

use crate::resultset::ResultSet;
use crate::{Result, StorageError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Handle on the embedded database file. Holds connect options only;
/// no connection is opened until a unit of work acquires one.
#[derive(Clone)]
pub struct Storage {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Storage {
    /// Point at an existing database file.
    ///
    /// The file is not touched here. If it is missing, acquisition fails
    /// with [`StorageError::Connection`] when a unit of work first needs it.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(false);

        Self { path, options }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open and immediately release a connection, verifying the database
    /// file is reachable. No query is issued.
    pub async fn check(&self) -> Result<()> {
        let conn = self.acquire().await?;
        release(conn).await;
        Ok(())
    }

    /// Fetch every row of `table` in the database's native order.
    ///
    /// The connection lives only for this call: opened before the query,
    /// closed before returning whether the query succeeded or not.
    pub async fn table_rows(&self, table: &str) -> Result<ResultSet> {
        let mut conn = self.acquire().await?;
        let fetched = fetch_table(&mut conn, table).await;
        release(conn).await;
        fetched
    }

    async fn acquire(&self) -> Result<SqliteConnection> {
        let conn = SqliteConnection::connect_with(&self.options)
            .await
            .map_err(StorageError::Connection)?;

        debug!("Connection opened: {}", self.path.display());
        Ok(conn)
    }
}

async fn fetch_table(conn: &mut SqliteConnection, table: &str) -> Result<ResultSet> {
    let sql = format!("SELECT * FROM {}", quote_ident(table));
    let rows = sqlx::query(&sql)
        .fetch_all(conn)
        .await
        .map_err(StorageError::Query)?;

    ResultSet::from_sqlite_rows(&rows)
}

/// Close gracefully; a failed close still drops the handle.
async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Connection close failed: {}", e);
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
