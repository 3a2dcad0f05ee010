//! CLI result types.

use std::path::PathBuf;

/// Outcome of a successful export run.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Filename the artifact was written under.
    pub filename: String,
    /// Directory the artifact landed in.
    pub output_dir: PathBuf,
    /// Number of data rows exported.
    pub rows: usize,
    /// Artifact payload size.
    pub bytes_written: usize,
    /// Total elapsed time in milliseconds.
    pub elapsed_ms: u64,
}
