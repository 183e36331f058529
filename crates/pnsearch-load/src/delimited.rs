//! CSV source. The header row names the columns; empty fields load as absent
//! cells. Every record must have as many fields as the header.

use crate::{DatasetSource, LoadError};
use pnsearch_core::{Column, Dataset};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        read_csv(reader, &self.path.display().to_string())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

/// Read CSV text from any reader.
pub fn from_reader<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    read_csv(reader, "<reader>")
}

fn read_csv<R: Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Dataset, LoadError> {
    let names: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    if names.is_empty() {
        return Err(LoadError::NoTextColumns(origin.to_string()));
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push((!field.is_empty()).then(|| field.to_string()));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Ok(Dataset::new(columns)?)
}
