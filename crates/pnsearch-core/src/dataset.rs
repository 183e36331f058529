//! Dataset store: the read-only, column-oriented table every search runs against.
//!
//! A [`Dataset`] is built once at startup and never mutated. All query
//! operations go through [`View`], a logical window over the dataset made of a
//! row-index vector and a column-index vector. Filtering, sorting and
//! selecting each return a new view; the underlying cells are never copied.

use crate::error::SearchError;
use crate::filter::FilterSet;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while assembling a [`Dataset`] from loaded columns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("column {column} has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// A named, ordered sequence of optional string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Cell at `row`, `None` when the cell is absent or out of range.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.cells.get(row).and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// The complete in-memory table.
///
/// Column order is the order the loader produced; every column has exactly
/// [`Dataset::len`] cells.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl Dataset {
    /// Assemble a dataset, rejecting duplicate names and columns of unequal length.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let rows = columns.first().map_or(0, Column::len);
        let mut index = HashMap::with_capacity(columns.len());

        for (i, column) in columns.iter().enumerate() {
            if column.len() != rows {
                return Err(DatasetError::RaggedColumn {
                    column: column.name.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
            if index.insert(column.name.clone(), i).is_some() {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self {
            columns,
            index,
            rows,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column count.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// A view over every row and column, in load order.
    pub fn view(&self) -> View<'_> {
        View {
            dataset: self,
            rows: (0..self.rows).collect(),
            columns: (0..self.columns.len()).collect(),
        }
    }

    pub fn filter(&self, filters: &FilterSet) -> Result<View<'_>, SearchError> {
        self.view().filter(filters)
    }

    pub fn sort(&self, column: &str, direction: SortDirection) -> Result<View<'_>, SearchError> {
        self.view().sort(column, direction)
    }

    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<View<'_>, SearchError> {
        self.view().select(columns)
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// A logical subset of a [`Dataset`]: which rows, in which order, and which
/// columns, in which order.
#[derive(Debug, Clone)]
pub struct View<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
    columns: Vec<usize>,
}

impl<'a> View<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Dataset row ids, in view order.
    pub fn row_ids(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&'a str> {
        let dataset = self.dataset;
        self.columns
            .iter()
            .map(|&c| dataset.columns[c].name())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Cells of the `pos`-th visible column, in view row order.
    pub fn column_cells(&self, pos: usize) -> impl Iterator<Item = Option<&'a str>> + '_ {
        let dataset: &'a Dataset = self.dataset;
        let column = &dataset.columns[self.columns[pos]];
        self.rows.iter().map(move |&r| column.get(r))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let idx = self.dataset.column_index(name)?;
        self.columns.iter().position(|&c| c == idx)
    }

    /// Keep the rows accepted by `filters`. Clauses may reference any dataset
    /// column, including ones hidden from this view.
    pub fn filter(&self, filters: &FilterSet) -> Result<View<'a>, SearchError> {
        let bound = filters.bind(self.dataset)?;
        let rows = self
            .rows
            .iter()
            .copied()
            .filter(|&r| bound.matches(r))
            .collect();
        Ok(View {
            dataset: self.dataset,
            rows,
            columns: self.columns.clone(),
        })
    }

    /// Stable sort by the string value of `column`; absent cells order first.
    pub fn sort(&self, column: &str, direction: SortDirection) -> Result<View<'a>, SearchError> {
        let pos = self
            .position(column)
            .ok_or_else(|| SearchError::UnknownColumn(column.to_string()))?;
        let key = &self.dataset.columns[self.columns[pos]];

        let mut rows = self.rows.clone();
        rows.sort_by(|&a, &b| {
            let ordering: Ordering = key.get(a).cmp(&key.get(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(View {
            dataset: self.dataset,
            rows,
            columns: self.columns.clone(),
        })
    }

    /// Restrict and reorder the visible columns to exactly `columns`.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<View<'a>, SearchError> {
        let picked = columns
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.position(name)
                    .map(|pos| self.columns[pos])
                    .ok_or_else(|| SearchError::UnknownColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(View {
            dataset: self.dataset,
            rows: self.rows.clone(),
            columns: picked,
        })
    }

    /// The first `n` rows of this view.
    pub fn head(&self, n: usize) -> View<'a> {
        View {
            dataset: self.dataset,
            rows: self.rows.iter().copied().take(n).collect(),
            columns: self.columns.clone(),
        }
    }
}
