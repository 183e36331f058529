//! Loader errors. Any of these stops startup.

use pnsearch_core::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("no text columns in {0}")]
    NoTextColumns(String),
}
