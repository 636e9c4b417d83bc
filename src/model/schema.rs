//! Declared column types for MBP snapshot files
//!
//! Instead of inferring a type per column from the data, every expected MBP
//! column name maps to a declared type, and cells are parsed (and validated)
//! against that declaration.

use serde::{Deserialize, Serialize};

/// Declared type of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Int,
    Float,
    #[default]
    String,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::String => write!(f, "string"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Column index (0-based position in the projection)
    pub index: usize,
    /// Declared type
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column with its type declared by the MBP schema
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        let name = name.into();
        let column_type = Schema::mbp().column_type(&name);
        Self {
            name,
            index,
            column_type,
        }
    }

    /// Create a column with an explicit type
    pub fn with_type(name: impl Into<String>, index: usize, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            index,
            column_type,
        }
    }
}

/// Name-based column typing rules
#[derive(Debug, Clone, Copy)]
pub struct Schema;

impl Schema {
    /// The schema for MBP-10 snapshot files as written by the book
    /// reconstruction tool
    pub fn mbp() -> Self {
        Schema
    }

    /// Declared type for a column name.
    ///
    /// Unrecognized names fall back to `String`, which always parses and
    /// compares byte-for-byte.
    pub fn column_type(&self, name: &str) -> ColumnType {
        match name {
            // Leading unnamed column is the output row index
            "" => ColumnType::Int,
            "ts_recv" | "ts_event" | "ts_in_delta" | "sequence" | "rtype" | "publisher_id"
            | "instrument_id" | "depth" | "flags" | "channel_id" | "order_id" | "size" => {
                ColumnType::Int
            }
            "price" => ColumnType::Float,
            "action" | "side" | "symbol" => ColumnType::String,
            _ => Self::level_column_type(name).unwrap_or(ColumnType::String),
        }
    }

    /// Typing for per-level book columns: bid_px_00 through ask_ct_09
    fn level_column_type(name: &str) -> Option<ColumnType> {
        let rest = name
            .strip_prefix("bid_")
            .or_else(|| name.strip_prefix("ask_"))?;
        let (kind, level) = rest.split_once('_')?;
        if level.len() != 2 || !level.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match kind {
            "px" => Some(ColumnType::Float),
            "sz" | "ct" => Some(ColumnType::Int),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_columns() {
        let schema = Schema::mbp();
        assert_eq!(schema.column_type(""), ColumnType::Int);
        assert_eq!(schema.column_type("ts_event"), ColumnType::Int);
        assert_eq!(schema.column_type("sequence"), ColumnType::Int);
        assert_eq!(schema.column_type("price"), ColumnType::Float);
        assert_eq!(schema.column_type("side"), ColumnType::String);
        assert_eq!(schema.column_type("symbol"), ColumnType::String);
    }

    #[test]
    fn test_level_columns() {
        let schema = Schema::mbp();
        assert_eq!(schema.column_type("bid_px_00"), ColumnType::Float);
        assert_eq!(schema.column_type("ask_px_09"), ColumnType::Float);
        assert_eq!(schema.column_type("bid_sz_03"), ColumnType::Int);
        assert_eq!(schema.column_type("ask_ct_07"), ColumnType::Int);
    }

    #[test]
    fn test_unrecognized_falls_back_to_string() {
        let schema = Schema::mbp();
        assert_eq!(schema.column_type("comment"), ColumnType::String);
        assert_eq!(schema.column_type("bid_px_9"), ColumnType::String);
        assert_eq!(schema.column_type("bid_foo_00"), ColumnType::String);
    }
}
