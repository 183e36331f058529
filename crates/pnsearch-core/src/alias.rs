//! Alias table: storage column names ⇄ user-facing display names.
//!
//! Lookups fall back to the name itself, so columns without an alias are
//! shown under their storage name and accepted back under that same name.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("column {0} is aliased more than once")]
    DuplicateColumn(String),
    #[error("display name {0} is used by more than one column")]
    DuplicateDisplay(String),
    #[error("display name {display} for {column} hides the column of the same name")]
    ShadowsColumn { display: String, column: String },
}

/// A display name paired with the storage column it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub display: String,
    pub column: String,
}

/// Bijection between storage names and display names.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    display_of: HashMap<String, String>,
    column_of: HashMap<String, String>,
}

impl AliasTable {
    /// Build from `(storage, display)` pairs. Fails if either side repeats.
    pub fn new<I, C, D>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        let mut table = Self::default();
        for (column, display) in pairs {
            let (column, display) = (column.into(), display.into());
            if table.display_of.contains_key(&column) {
                return Err(AliasError::DuplicateColumn(column));
            }
            if table.column_of.contains_key(&display) {
                return Err(AliasError::DuplicateDisplay(display));
            }
            table.display_of.insert(column.clone(), display.clone());
            table.column_of.insert(display, column);
        }
        Ok(table)
    }

    /// Storage name → display name.
    pub fn to_display<'a>(&'a self, column: &'a str) -> &'a str {
        self.display_of.get(column).map_or(column, String::as_str)
    }

    /// Display name → storage name.
    pub fn to_storage<'a>(&'a self, display: &'a str) -> &'a str {
        self.column_of.get(display).map_or(display, String::as_str)
    }

    pub fn display_names<S: AsRef<str>>(&self, columns: &[S]) -> Vec<String> {
        columns
            .iter()
            .map(|c| self.to_display(c.as_ref()).to_string())
            .collect()
    }

    pub fn storage_names<S: AsRef<str>>(&self, displays: &[S]) -> Vec<String> {
        displays
            .iter()
            .map(|d| self.to_storage(d.as_ref()).to_string())
            .collect()
    }

    /// One [`Label`] per storage column, preserving order.
    pub fn labels<S: AsRef<str>>(&self, columns: &[S]) -> Vec<Label> {
        columns
            .iter()
            .map(|c| Label {
                display: self.to_display(c.as_ref()).to_string(),
                column: c.as_ref().to_string(),
            })
            .collect()
    }

    /// Reject aliases whose display name is also the storage name of another
    /// column in `columns`; that column could no longer be selected or sorted.
    pub fn check_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), AliasError> {
        for name in columns {
            let name = name.as_ref();
            if let Some(column) = self.column_of.get(name) {
                if column != name {
                    return Err(AliasError::ShadowsColumn {
                        display: name.to_string(),
                        column: column.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.display_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display_of.is_empty()
    }
}
