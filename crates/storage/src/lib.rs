//! Glance Storage Layer
//!
//! Scoped connections to a single embedded SQLite file.

mod connection;
mod resultset;

pub use connection::Storage;
pub use resultset::{ResultSet, Row, Value};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    Connection(sqlx::Error),

    #[error("Query failed: {0}")]
    Query(sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
