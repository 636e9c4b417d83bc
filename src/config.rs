//! Configuration handling for mbpcheck

use std::path::PathBuf;

use crate::compare::LengthPolicy;

/// Default reference file, matching the reconstruction tool's input naming
pub const DEFAULT_REFERENCE: &str = "mbp.csv";
/// Default candidate file, as written by the reconstruction tool
pub const DEFAULT_CANDIDATE: &str = "mbp_new.csv";
/// Default number of leading data rows to compare
pub const DEFAULT_ROW_LIMIT: usize = 100;

/// Report rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Configuration for a verification run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the reference slice
    pub reference: PathBuf,
    /// Path to the regenerated candidate slice
    pub candidate: PathBuf,
    /// Number of leading data rows to compare
    pub row_limit: usize,
    /// Behavior when the slices have different row counts
    pub length_policy: LengthPolicy,
    /// Report rendering format
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: PathBuf::from(DEFAULT_REFERENCE),
            candidate: PathBuf::from(DEFAULT_CANDIDATE),
            row_limit: DEFAULT_ROW_LIMIT,
            length_policy: LengthPolicy::default(),
            report_format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(reference: PathBuf, candidate: PathBuf) -> Self {
        Self {
            reference,
            candidate,
            ..Default::default()
        }
    }

    /// Set the number of rows to compare
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = limit;
        self
    }

    /// Set the length-mismatch policy
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Set the report format
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }
}
