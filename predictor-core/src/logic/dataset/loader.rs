//! Dataset loading from CSV

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use super::DatasetError;

/// First rows of the dataset, as raw cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

/// In-memory table of raw CSV cells
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Load dataset from a CSV file
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;

        log::info!(
            "Dataset loaded: {} ({} rows, {} columns)",
            path.display(),
            dataset.n_rows(),
            dataset.headers.len()
        );

        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DatasetError::MissingHeader);
        }

        // Columns are looked up by name
        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|h| !seen.insert(h.as_str())) {
            return Err(DatasetError::DuplicateColumn(duplicate.clone()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Preview {
        Preview {
            columns: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
            total_rows: self.rows.len(),
        }
    }

    /// Parsed values of a column; empty and NaN cells are missing (`None`)
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))?;

        self.rows
            .iter()
            .map(|row| parse_cell(row.get(index).map(String::as_str).unwrap_or("")))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DatasetError::NotNumeric(name.to_string()))
    }

    /// All columns whose cells parse as numbers, in header order
    pub fn numeric_columns(&self) -> Vec<(String, Vec<Option<f64>>)> {
        self.headers
            .iter()
            .filter_map(|name| {
                self.numeric_column(name)
                    .ok()
                    .map(|values| (name.clone(), values))
            })
            .collect()
    }
}

/// `Some(None)` for a missing value, `None` when the cell is not a number
fn parse_cell(cell: &str) -> Option<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") || cell.eq_ignore_ascii_case("na") {
        return Some(None);
    }

    cell.parse::<f64>().ok().map(Some)
}

/// Present values only
pub(crate) fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}
