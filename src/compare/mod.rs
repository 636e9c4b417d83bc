//! Positional slice comparison

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::model::{Row, Table};

/// What to do when the two slices have different row counts.
///
/// The original check silently aligned by position and truncated to the
/// shorter slice; `Truncate` keeps that behavior and records it in the
/// result, `Error` fails the run instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    #[default]
    Truncate,
    Error,
}

/// Outcome of comparing two slices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceComparison {
    /// Rows where every projected cell compared equal
    pub matching_rows: usize,
    /// Rows actually compared (the shorter slice's length under Truncate)
    pub rows_compared: usize,
    /// Rows loaded from the reference slice
    pub reference_rows: usize,
    /// Rows loaded from the candidate slice
    pub candidate_rows: usize,
    /// True when the slices had unequal lengths and the tail was skipped
    pub truncated: bool,
}

impl SliceComparison {
    /// Check whether every compared row matched and nothing was truncated
    pub fn is_identical(&self) -> bool {
        !self.truncated && self.matching_rows == self.rows_compared
    }
}

/// Compare two slices row by row, by position. A row matches only if every
/// cell is equal under exact typed equality.
///
/// Both tables must carry the same column set; the loader guarantees this
/// when both were projected onto one header.
pub fn compare_slices(
    reference: &Table,
    candidate: &Table,
    policy: LengthPolicy,
) -> Result<SliceComparison> {
    debug_assert!(reference
        .column_names()
        .eq(candidate.column_names()));

    let reference_rows = reference.row_count();
    let candidate_rows = candidate.row_count();

    if reference_rows != candidate_rows && policy == LengthPolicy::Error {
        return Err(CheckError::LengthMismatch {
            reference: reference_rows,
            candidate: candidate_rows,
        });
    }

    let rows_compared = reference_rows.min(candidate_rows);
    let matching_rows = reference
        .rows
        .iter()
        .zip(candidate.rows.iter())
        .filter(|(a, b)| rows_equal(a, b))
        .count();

    Ok(SliceComparison {
        matching_rows,
        rows_compared,
        reference_rows,
        candidate_rows,
        truncated: reference_rows != candidate_rows,
    })
}

fn rows_equal(a: &Row, b: &Row) -> bool {
    a.cells == b.cells
}
