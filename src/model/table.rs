//! Table, Row, and Cell data structures

use serde::{Deserialize, Serialize};

use super::schema::{Column, ColumnType};

/// A typed cell value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl CellValue {
    /// Parse a raw field against a declared column type.
    ///
    /// Empty fields are Null for every declared type. `"1.0"` and `"1.00"`
    /// in a float column parse to the same f64 and therefore compare equal;
    /// no further normalization is applied.
    pub fn parse(raw: &str, column_type: ColumnType) -> std::result::Result<Self, String> {
        if raw.is_empty() {
            return Ok(CellValue::Null);
        }
        match column_type {
            ColumnType::Int => raw
                .parse::<i64>()
                .map(CellValue::Int)
                .map_err(|_| format!("`{raw}` is not a valid int")),
            ColumnType::Float => raw
                .parse::<f64>()
                .map(CellValue::Float)
                .map_err(|_| format!("`{raw}` is not a valid float")),
            ColumnType::String => Ok(CellValue::String(raw.to_string())),
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// A row in a loaded slice
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in projection order
    pub cells: Vec<CellValue>,
    /// Original line number in the source file (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by projection index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// An immutable slice of a tabular file: up to `limit` rows projected onto a
/// fixed column set
#[derive(Debug)]
pub struct Table {
    /// Column definitions, in projection order
    pub columns: Vec<Column>,
    /// Loaded rows, in file order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows are only added during load; the table is never
    /// mutated afterwards.
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_line: usize) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(Row::new(cells, source_line));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Ordered column names
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_cells() {
        assert_eq!(
            CellValue::parse("42", ColumnType::Int),
            Ok(CellValue::Int(42))
        );
        assert_eq!(
            CellValue::parse("5.51", ColumnType::Float),
            Ok(CellValue::Float(5.51))
        );
        assert_eq!(
            CellValue::parse("B", ColumnType::String),
            Ok(CellValue::String("B".to_string()))
        );
        assert_eq!(CellValue::parse("", ColumnType::Int), Ok(CellValue::Null));
        assert!(CellValue::parse("abc", ColumnType::Int).is_err());
        assert!(CellValue::parse("1.2.3", ColumnType::Float).is_err());
    }

    #[test]
    fn test_float_equality_is_representation_equality() {
        let a = CellValue::parse("1.0", ColumnType::Float).unwrap();
        let b = CellValue::parse("1.00", ColumnType::Float).unwrap();
        assert_eq!(a, b);

        let c = CellValue::parse("1.000001", ColumnType::Float).unwrap();
        assert_ne!(a, c);

        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(f64::NAN));
    }

    #[test]
    fn test_no_cross_type_equality() {
        assert_ne!(CellValue::Int(1), CellValue::Float(1.0));
        assert_ne!(CellValue::Int(1), CellValue::String("1".to_string()));
        assert_ne!(CellValue::Null, CellValue::String(String::new()));
    }

    #[test]
    fn test_table_accessors() {
        let mut table = Table::new(vec![
            Column::with_type("id", 0, ColumnType::Int),
            Column::with_type("val", 1, ColumnType::String),
        ]);
        table.add_row(vec![CellValue::Int(1), "a".into()], 2);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_index("val"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert_eq!(table.rows[0].get(0), Some(&CellValue::Int(1)));
        assert_eq!(table.rows[0].source_line, 2);
    }
}
