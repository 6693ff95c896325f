use std::path::PathBuf;

use chrono::{DateTime, Utc};
use playbill_model::RowDiagnostic;

/// What a build run did, for the console summary.
#[derive(Debug)]
pub struct BuildResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub source: String,
    pub generated_at: DateTime<Utc>,
    /// Data rows read, excluding the header and suppressed blank rows.
    pub rows_read: usize,
    pub emitted: usize,
    pub diagnostics: Vec<RowDiagnostic>,
}

impl BuildResult {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}
