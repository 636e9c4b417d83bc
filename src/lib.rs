//! mbpcheck - slice verification for regenerated MBP CSV files
//!
//! Loads the first N rows of a reference and a regenerated market-by-price
//! snapshot file, projected onto the candidate's header columns, and counts
//! how many rows are identical under an explicit per-column schema.

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod reader;
pub mod report;

pub use compare::{compare_slices, LengthPolicy, SliceComparison};
pub use config::Config;
pub use error::CheckError;
pub use model::{Schema, Table};
