//! Generic result-set model
//!
//! Rows are materialized without a schema: each value carries its SQLite
//! storage class, and columns are addressed by name through the set.

use crate::{Result, StorageError};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};
use std::fmt;

/// A single SQLite value, tagged by storage class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("-"),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
            Value::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

/// One row of a result set, values in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// The full, ordered output of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Column names in statement order. Empty when the query matched no rows.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a value by row index and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.values.get(idx)
    }

    pub(crate) fn from_sqlite_rows(rows: &[SqliteRow]) -> Result<Self> {
        let columns = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(decode_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }
}

fn decode_row(row: &SqliteRow) -> Result<Row> {
    let values = (0..row.len())
        .map(|idx| decode_value(row, idx))
        .collect::<Result<Vec<_>>>()?;

    Ok(Row { values })
}

fn decode_value(row: &SqliteRow, idx: usize) -> Result<Value> {
    let raw = row.try_get_raw(idx).map_err(StorageError::Query)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    // Runtime storage class of the value, not the declared column type.
    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => Value::Integer(row.try_get(idx).map_err(StorageError::Query)?),
        "REAL" => Value::Real(row.try_get(idx).map_err(StorageError::Query)?),
        "BLOB" => Value::Blob(row.try_get(idx).map_err(StorageError::Query)?),
        _ => Value::Text(row.try_get(idx).map_err(StorageError::Query)?),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        ResultSet::new(
            vec!["id".into(), "name".into()],
            vec![
                Row::new(vec![Value::Integer(1), Value::Text("alice".into())]),
                Row::new(vec![Value::Integer(2), Value::Null]),
            ],
        )
    }

    #[test]
    fn value_lookup_by_column_name() {
        let set = sample();
        assert_eq!(set.value(0, "name"), Some(&Value::Text("alice".into())));
        assert_eq!(set.value(1, "name"), Some(&Value::Null));
        assert_eq!(set.value(0, "missing"), None);
        assert_eq!(set.value(9, "id"), None);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Null.to_string(), "-");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Real(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("hi".into()).to_string(), "hi");
        assert_eq!(Value::Blob(vec![1, 2, 3]).to_string(), "<3 bytes>");
    }

    #[test]
    fn serializes_as_plain_json_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "columns": ["id", "name"],
                "rows": [
                    { "values": [1, "alice"] },
                    { "values": [2, null] },
                ],
            })
        );
    }
}
