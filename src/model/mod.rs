//! Data model for loaded MBP slices

mod schema;
mod table;

pub use schema::{Column, ColumnType, Schema};
pub use table::{CellValue, Row, Table};
