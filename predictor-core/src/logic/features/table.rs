//! Feature Table - Named, row-major matrix handed to a model
//!
//! The collector always produces one row, but models accept any number of rows
//! and return one label per row.

use ndarray::{Array2, ArrayView1};

/// Error building a table with inconsistent shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("table shape mismatch: {columns} columns, row {row} has {found} values")]
pub struct TableShapeError {
    pub columns: usize,
    pub row: usize,
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    data: Array2<f64>,
}

impl FeatureTable {
    /// Build from column names and row-major values
    pub fn from_rows(columns: Vec<String>, rows: &[Vec<f64>]) -> Result<Self, TableShapeError> {
        let width = columns.len();
        let mut flat = Vec::with_capacity(rows.len() * width);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TableShapeError { columns: width, row: i, found: row.len() });
            }
            flat.extend_from_slice(row);
        }

        let data = Array2::from_shape_vec((rows.len(), width), flat)
            .map_err(|_| TableShapeError { columns: width, row: 0, found: 0 })?;

        Ok(Self { columns, data })
    }

    /// One-row table; the row length always equals the column count
    pub fn single_row<const N: usize>(columns: [&str; N], values: [f64; N]) -> Self {
        let data = Array2::from_shape_vec((1, N), values.to_vec())
            .unwrap_or_else(|_| Array2::zeros((1, N)));

        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            data,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.n_rows()).then(|| self.data.row(index))
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Same values under different column names
    pub fn renamed(mut self, columns: Vec<String>) -> Result<Self, TableShapeError> {
        if columns.len() != self.n_cols() {
            return Err(TableShapeError { columns: columns.len(), row: 0, found: self.n_cols() });
        }
        self.columns = columns;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let table = FeatureTable::from_rows(
            vec!["a".into(), "b".into()],
            &[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        ).unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.row(1).unwrap().to_vec(), vec![3.0, 4.0]);
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = FeatureTable::from_rows(vec!["a".into(), "b".into()], &[vec![1.0, 2.0], vec![3.0]])
            .unwrap_err();
        assert_eq!(err.row, 1);
        assert_eq!(err.found, 1);
    }

    #[test]
    fn test_single_row() {
        let table = FeatureTable::single_row(["x", "y", "z"], [1.0, 2.0, 3.0]);
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.column_index("z"), Some(2));
        assert_eq!(table.data()[[0, 1]], 2.0);
    }

    #[test]
    fn test_values_kept_at_full_precision() {
        let table = FeatureTable::single_row(["x"], [0.1]);
        assert_eq!(table.data()[[0, 0]], 0.1_f64);
    }

    #[test]
    fn test_renamed_requires_same_width() {
        let table = FeatureTable::single_row(["x", "y"], [1.0, 2.0]);
        assert!(table.clone().renamed(vec!["only".into()]).is_err());

        let renamed = table.renamed(vec!["p".into(), "q".into()]).unwrap();
        assert_eq!(renamed.columns(), &["p".to_string(), "q".to_string()]);
    }
}
