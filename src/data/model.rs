use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. The loader infers one [`ColumnType`]
/// per column; individual cells may still be `Null` (empty in the CSV).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// True when the cell holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the cell as an `f64` for statistics and charting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Case-insensitive substring match against the stringified cell.
    /// `Null` cells never match, whatever the needle.
    pub fn contains_ci(&self, needle_lower: &str) -> bool {
        if self.is_null() {
            return false;
        }
        self.to_string().to_lowercase().contains(needle_lower)
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred scalar type of a column
// ---------------------------------------------------------------------------

/// Column-wise inferred type. `Integer` and `Float` are the numeric
/// types eligible for statistics and chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Bool,
    Text,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Text => "text",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once by the loader, then only read.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Inferred type per column, same order as `columns`.
    pub column_types: Vec<ColumnType>,
    /// Row-major cells; every row has `columns.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset from raw string records, inferring column types.
    ///
    /// A column is `Integer` when every non-empty cell parses as `i64`,
    /// `Float` when every non-empty cell parses as `f64`, `Bool` when
    /// every non-empty cell is `true`/`false`, otherwise `Text`. Empty
    /// cells become `Null` and do not vote.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let column_types: Vec<ColumnType> = (0..columns.len())
            .map(|c| infer_column_type(records.iter().map(|r| r[c].as_str())))
            .collect();

        let rows: Vec<Vec<CellValue>> = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .zip(column_types.iter())
                    .map(|(raw, ty)| parse_cell(&raw, *ty))
                    .collect()
            })
            .collect();

        Dataset {
            columns,
            column_types,
            rows,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Inferred type of a named column.
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column_index(name).map(|i| self.column_types[i])
    }

    /// Names of all numeric columns, in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(self.column_types.iter())
            .filter(|(_, ty)| ty.is_numeric())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Total number of `Null` cells across the whole table.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_null()).count())
            .sum()
    }
}

fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;
    let mut seen_value = false;

    for cell in cells {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        seen_value = true;
        if all_int && cell.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && cell.parse::<f64>().is_err() {
            all_float = false;
        }
        if all_bool && cell != "true" && cell != "false" {
            all_bool = false;
        }
        if !all_int && !all_float && !all_bool {
            return ColumnType::Text;
        }
    }

    // An all-null column carries no evidence; treat it as text.
    if !seen_value {
        ColumnType::Text
    } else if all_int {
        ColumnType::Integer
    } else if all_float {
        ColumnType::Float
    } else if all_bool {
        ColumnType::Bool
    } else {
        ColumnType::Text
    }
}

fn parse_cell(raw: &str, ty: ColumnType) -> CellValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return CellValue::Null;
    }
    match ty {
        ColumnType::Integer => raw
            .parse::<i64>()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Null),
        ColumnType::Float => raw
            .parse::<f64>()
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        ColumnType::Bool => match raw {
            "true" => CellValue::Bool(true),
            "false" => CellValue::Bool(false),
            _ => CellValue::Null,
        },
        ColumnType::Text => CellValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn infers_column_types() {
        let ds = Dataset::from_records(
            vec![
                "name".into(),
                "age".into(),
                "score".into(),
                "passed".into(),
            ],
            records(&[
                &["Alice", "21", "88.5", "true"],
                &["Bob", "22", "73.0", "false"],
            ]),
        );
        assert_eq!(
            ds.column_types,
            vec![
                ColumnType::Text,
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Bool
            ]
        );
        assert_eq!(ds.numeric_columns(), vec!["age", "score"]);
    }

    #[test]
    fn integers_promote_to_float_on_mixed_column() {
        let ds = Dataset::from_records(
            vec!["v".into()],
            records(&[&["1"], &["2.5"], &["3"]]),
        );
        assert_eq!(ds.column_types, vec![ColumnType::Float]);
        assert_eq!(ds.rows[0][0], CellValue::Float(1.0));
    }

    #[test]
    fn empty_cells_become_null_and_do_not_vote() {
        let ds = Dataset::from_records(
            vec!["v".into()],
            records(&[&[""], &["7"], &[""]]),
        );
        assert_eq!(ds.column_types, vec![ColumnType::Integer]);
        assert_eq!(ds.rows[0][0], CellValue::Null);
        assert_eq!(ds.missing_count(), 2);
    }

    #[test]
    fn all_null_column_is_text() {
        let ds = Dataset::from_records(vec!["v".into()], records(&[&[""], &[""]]));
        assert_eq!(ds.column_types, vec![ColumnType::Text]);
    }

    #[test]
    fn null_cells_never_match_search() {
        assert!(!CellValue::Null.contains_ci(""));
        assert!(CellValue::Text("Alice".into()).contains_ci("ali"));
        assert!(CellValue::Integer(142).contains_ci("42"));
    }
}
