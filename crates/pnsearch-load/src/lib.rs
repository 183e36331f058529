//! pnsearch-load: dataset sources for pnsearch.
//!
//! Each source reads a complete table once, at startup, and hands back a
//! [`pnsearch_core::Dataset`]. Only text columns survive loading; the search
//! pipeline never sees anything else.

pub mod delimited;
pub mod error;
pub mod sqlite;

use pnsearch_core::Dataset;
use std::path::Path;

pub use delimited::CsvSource;
pub use error::LoadError;
pub use sqlite::SqliteSource;

/// Implemented by each dataset source.
pub trait DatasetSource: Send + Sync {
    /// Read the whole table.
    fn load(&self) -> Result<Dataset, LoadError>;

    /// Short human description, for logs.
    fn describe(&self) -> String;

    /// Whether rows come back newest first without any help from the
    /// pipeline.
    fn presorted(&self) -> bool {
        false
    }
}

/// Pick a source for `path` by extension: `.csv` is read as CSV, anything
/// else is opened as a SQLite database and `query` is run against it.
pub fn source_for(path: &Path, query: &str) -> Box<dyn DatasetSource> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        Box::new(CsvSource::new(path))
    } else {
        Box::new(SqliteSource::new(path, query))
    }
}

/// Load the dataset at `path`, failing if the file does not exist.
pub fn load(path: &Path, query: &str) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let source = source_for(path, query);
    let dataset = source.load()?;
    tracing::info!(
        source = %source.describe(),
        rows = dataset.len(),
        columns = dataset.width(),
        presorted = source.presorted(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Whether the source chosen for `path` delivers rows in natural order.
pub fn presorted(path: &Path, query: &str) -> bool {
    source_for(path, query).presorted()
}
