//! Glance Dashboard
//!
//! Run-once load-and-display of a single table.

mod render;

pub use render::render_table;

use glance_storage::{ResultSet, Storage};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] glance_storage::StorageError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard configuration. The table name is deliberately not a constant.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub table: String,
}

/// Load the configured table and render it to stdout.
///
/// Errors propagate before anything is printed: a failed load produces no
/// partial output.
pub async fn run(storage: &Storage, config: &DashboardConfig) -> Result<()> {
    let set = load(storage, &config.table).await?;
    print!("{}", render_table(&set));
    Ok(())
}

/// Materialize the full table through one scoped connection.
pub async fn load(storage: &Storage, table: &str) -> Result<ResultSet> {
    let set = storage.table_rows(table).await?;
    info!(table = table, rows = set.len(), "Table loaded");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_storage::StorageError;

    #[tokio::test]
    async fn load_propagates_connection_error_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path().join("missing.db"));

        let err = load(&storage, "your_table").await.unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Storage(StorageError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn load_propagates_query_error_for_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glance.db");
        // A zero-length file is a valid empty SQLite database.
        std::fs::File::create(&path).unwrap();

        let err = load(&Storage::open(&path), "your_table")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Storage(StorageError::Query(_))
        ));
    }
}
