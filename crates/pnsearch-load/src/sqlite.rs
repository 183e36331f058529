//! SQLite source: runs one query and keeps its text columns.
//!
//! A column is kept when every non-null value it returns is TEXT. A single
//! integer, real or blob value drops the whole column; all-null columns are
//! kept. Row order is whatever the query's ORDER BY produces.

use crate::{DatasetSource, LoadError};
use pnsearch_core::{Column, Dataset};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
    query: String,
}

impl SqliteSource {
    pub fn new(path: impl AsRef<Path>, query: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            query: query.into(),
        }
    }
}

impl DatasetSource for SqliteSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        read_query(&conn, &self.query)
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    /// The configured query carries the ORDER BY.
    fn presorted(&self) -> bool {
        true
    }
}

/// Run `sql` on `conn` and collect its text columns.
pub fn read_query(conn: &Connection, sql: &str) -> Result<Dataset, LoadError> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    let mut text = vec![true; names.len()];

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        for (i, column) in cells.iter_mut().enumerate() {
            if !text[i] {
                continue;
            }
            match row.get_ref(i)? {
                ValueRef::Null => column.push(None),
                ValueRef::Text(bytes) => {
                    column.push(Some(String::from_utf8_lossy(bytes).into_owned()))
                }
                ValueRef::Integer(_) | ValueRef::Real(_) | ValueRef::Blob(_) => {
                    text[i] = false;
                    column.clear();
                }
            }
        }
    }

    let mut columns = Vec::with_capacity(names.len());
    for ((name, cells), keep) in names.into_iter().zip(cells).zip(text) {
        if keep {
            columns.push(Column::new(name, cells));
        } else {
            tracing::info!(column = %name, "drop non-text column");
        }
    }
    if columns.is_empty() {
        return Err(LoadError::NoTextColumns(sql.to_string()));
    }
    Ok(Dataset::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE order2 (登録日 TEXT, 品名 TEXT, 必要数 INTEGER, 備考 TEXT);
             INSERT INTO order2 VALUES ('2024-01-02', 'ボルト', 4, NULL);
             INSERT INTO order2 VALUES ('2024-01-01', NULL, 2, NULL);
             INSERT INTO order2 VALUES ('2024-01-03', 'ナット', NULL, NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn keeps_text_columns_and_drops_numeric_ones() {
        let ds = read_query(&conn(), "SELECT * FROM order2 ORDER BY 登録日 DESC").unwrap();
        assert_eq!(ds.column_names(), vec!["登録日", "品名", "備考"]);
        assert_eq!(ds.len(), 3);
        let names: Vec<_> = (0..3).map(|r| ds.column("品名").unwrap().get(r)).collect();
        assert_eq!(names, vec![Some("ナット"), Some("ボルト"), None]);
    }

    #[test]
    fn no_text_columns_is_an_error() {
        let err = read_query(&conn(), "SELECT 必要数 FROM order2").unwrap_err();
        assert!(matches!(err, LoadError::NoTextColumns(_)));
    }

    #[test]
    fn bad_sql_is_an_error() {
        assert!(matches!(
            read_query(&conn(), "SELECT * FROM missing"),
            Err(LoadError::Sqlite(_))
        ));
    }
}
