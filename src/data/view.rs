use super::model::{CellValue, ColumnType, Dataset};

// ---------------------------------------------------------------------------
// TableView – the derived, displayable subset of the dataset
// ---------------------------------------------------------------------------

/// A projected, sampled, and optionally search-filtered view of the
/// dataset. Rebuilt from scratch on every frame; never mutated.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Retained column names, in selection order.
    pub columns: Vec<String>,
    /// Inferred type per retained column.
    pub column_types: Vec<ColumnType>,
    /// Retained rows, in original dataset order.
    pub rows: Vec<Vec<CellValue>>,
}

impl TableView {
    /// Build a view of `dataset`:
    ///
    /// 1. project onto `columns` in the given order (names the dataset
    ///    does not have are skipped),
    /// 2. keep the first `sample_size` rows — a deterministic prefix,
    ///    not a random sample,
    /// 3. if `search_term` is non-empty, retain rows where at least
    ///    one retained cell contains it case-insensitively. `Null`
    ///    cells never match.
    pub fn build(
        dataset: &Dataset,
        columns: &[String],
        sample_size: usize,
        search_term: &str,
    ) -> TableView {
        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|name| dataset.column_index(name))
            .collect();

        let columns: Vec<String> = indices.iter().map(|&i| dataset.columns[i].clone()).collect();
        let column_types: Vec<ColumnType> =
            indices.iter().map(|&i| dataset.column_types[i]).collect();

        let needle = search_term.trim().to_lowercase();

        let rows: Vec<Vec<CellValue>> = dataset
            .rows
            .iter()
            .take(sample_size)
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect::<Vec<_>>())
            .filter(|row: &Vec<CellValue>| {
                needle.is_empty() || row.iter().any(|cell| cell.contains_ci(&needle))
            })
            .collect();

        TableView {
            columns,
            column_types,
            rows,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a retained column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Names of the retained numeric columns.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(self.column_types.iter())
            .filter(|(_, ty)| ty.is_numeric())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Non-null numeric values of a column, in row order.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row[idx].as_f64())
            .collect()
    }

    /// Paired non-null (x, y) values, in row order, capped at
    /// `row_limit` rows scanned (not points kept).
    pub fn paired_values(&self, x: &str, y: &str, row_limit: usize) -> Vec<[f64; 2]> {
        let (Some(xi), Some(yi)) = (self.column_index(x), self.column_index(y)) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .take(row_limit)
            .filter_map(|row| Some([row[xi].as_f64()?, row[yi].as_f64()?]))
            .collect()
    }
}
