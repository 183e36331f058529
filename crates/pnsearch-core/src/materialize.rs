//! Materializer: turns a column-oriented [`View`] into capped, row-oriented
//! output.
//!
//! Columns are read one at a time (the cells of a column sit together in
//! memory) and then transposed into rows. Capping always keeps the leading
//! rows of the view; the row order is never touched.

use crate::alias::AliasTable;
use crate::dataset::View;
use crate::error::SearchError;
use crate::record::Record;

/// The two row caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Rows turned into an HTML table.
    pub display_rows: usize,
    /// Rows serialized to JSON or CSV.
    pub export_rows: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            display_rows: 1_000,
            export_rows: 50_000,
        }
    }
}

/// Which cap applies to a materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Display,
    Export,
}

impl Limits {
    pub fn cap(&self, output: Output) -> usize {
        match output {
            Output::Display => self.display_rows,
            Output::Export => self.export_rows,
        }
    }
}

/// Row-major search result: storage column names plus at most `cap` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializedView {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    matched: usize,
}

impl MaterializedView {
    /// Materialize the first `cap` rows of `view`. Absent cells become `""`.
    pub fn from_view(view: &View<'_>, cap: usize) -> Self {
        let head = view.head(cap);
        let columns: Vec<String> = head.column_names().into_iter().map(str::to_string).collect();
        let by_column: Vec<Vec<String>> = (0..head.width())
            .map(|pos| {
                head.column_cells(pos)
                    .map(|c| c.unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows: transpose(by_column, head.len()),
            matched: view.len(),
        }
    }

    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>, matched: usize) -> Self {
        Self {
            columns,
            rows,
            matched,
        }
    }

    /// Storage column names, in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rows held.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Rows that matched before capping.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn is_truncated(&self) -> bool {
        self.matched > self.rows.len()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, pos: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[pos].as_str())
    }

    /// Headers switched to display names and rows capped at `cap`.
    pub fn to_display_table(&self, aliases: &AliasTable, cap: usize) -> DisplayTable {
        DisplayTable {
            header: aliases.display_names(&self.columns),
            rows: self.rows.iter().take(cap).cloned().collect(),
            matched: self.matched,
        }
    }

    pub fn to_records(&self) -> Result<Vec<Record>, SearchError> {
        let layout = Record::layout(&self.columns)?;
        Ok(self
            .rows
            .iter()
            .map(|row| Record::from_row(&layout, row))
            .collect())
    }
}

/// What an HTML page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub matched: usize,
}

/// Column-major → row-major. `rows` is needed when there are no columns.
pub fn transpose(columns: Vec<Vec<String>>, rows: usize) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = (0..rows).map(|_| Vec::with_capacity(columns.len())).collect();
    for column in columns {
        for (row, cell) in out.iter_mut().zip(column) {
            row.push(cell);
        }
    }
    out
}
