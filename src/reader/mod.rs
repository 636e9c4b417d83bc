//! Reader layer for MBP snapshot CSV files

mod csv;

pub use self::csv::{load_slice, read_header};
