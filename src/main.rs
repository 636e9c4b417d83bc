//! mbpcheck - slice verification for regenerated MBP CSV files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use mbpcheck::compare::{compare_slices, LengthPolicy};
use mbpcheck::config::{
    Config, ReportFormat, DEFAULT_CANDIDATE, DEFAULT_REFERENCE, DEFAULT_ROW_LIMIT,
};
use mbpcheck::model::Schema;
use mbpcheck::reader::{load_slice, read_header};
use mbpcheck::report::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Text,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Text => ReportFormat::Text,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLengthPolicy {
    Truncate,
    Error,
}

impl From<CliLengthPolicy> for LengthPolicy {
    fn from(p: CliLengthPolicy) -> Self {
        match p {
            CliLengthPolicy::Truncate => LengthPolicy::Truncate,
            CliLengthPolicy::Error => LengthPolicy::Error,
        }
    }
}

/// Verify a regenerated MBP snapshot against a reference slice
#[derive(Parser, Debug)]
#[command(name = "mbpcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reference file
    #[arg(default_value = DEFAULT_REFERENCE)]
    reference: PathBuf,

    /// Regenerated file to verify
    #[arg(default_value = DEFAULT_CANDIDATE)]
    candidate: PathBuf,

    /// Number of leading data rows to compare
    #[arg(short = 'n', long = "rows", default_value_t = DEFAULT_ROW_LIMIT)]
    rows: usize,

    /// What to do when the two slices have different row counts
    #[arg(long, value_enum, default_value = "truncate")]
    length_mismatch: CliLengthPolicy,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliReportFormat,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.reference, cli.candidate)
        .with_row_limit(cli.rows)
        .with_length_policy(cli.length_mismatch.into())
        .with_report_format(cli.format.into());

    // The candidate's header decides which columns are compared; both files
    // must carry every one of them
    let columns = read_header(&config.candidate).with_context(|| {
        format!("failed to read header of {}", config.candidate.display())
    })?;

    let schema = Schema::mbp();
    let reference = load_slice(&config.reference, schema, &columns, config.row_limit)
        .with_context(|| {
            format!(
                "failed to load reference slice from {}",
                config.reference.display()
            )
        })?;
    let candidate = load_slice(&config.candidate, schema, &columns, config.row_limit)
        .with_context(|| {
            format!(
                "failed to load candidate slice from {}",
                config.candidate.display()
            )
        })?;

    let comparison = compare_slices(&reference, &candidate, config.length_policy)?;

    if comparison.truncated {
        eprintln!(
            "note: slices have different lengths ({} vs {} rows); compared the first {} only",
            comparison.reference_rows, comparison.candidate_rows, comparison.rows_compared
        );
    }

    render_to_stdout(&comparison, config.row_limit, config.report_format)
}
