//! Build stages: ingest, normalize, output.
//!
//! Each stage is a plain function so tests can drive them separately.
//! [`run_pipeline`] chains them and is what the `build` command calls.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, info_span};

use playbill_ingest::{read_csv_rows, split_header};
use playbill_model::{OutputDocument, PlaybillError, RawRow, format_timestamp};
use playbill_normalization::{NormalizeOutcome, normalize_rows};

use crate::types::BuildResult;

/// Settings for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Provenance string written into the document.
    pub source: String,
    /// Single-line JSON instead of two-space indentation.
    pub compact: bool,
    /// Run every stage but skip writing the output file.
    pub dry_run: bool,
}

/// Reads and tokenizes the input CSV.
pub fn ingest(input: &Path) -> Result<Vec<RawRow>> {
    read_csv_rows(input).with_context(|| format!("read {}", input.display()))
}

/// Splits off the header and normalizes the data rows.
///
/// Fails when there is no data row or the header is missing a required
/// column; either way no record is produced.
pub fn normalize(rows: &[RawRow]) -> Result<NormalizeOutcome> {
    let (header, data_rows) = split_header(rows)?;
    let outcome = normalize_rows(header, data_rows).context("resolve header")?;
    Ok(outcome)
}

/// Serializes the document.
pub fn render(document: &OutputDocument, compact: bool) -> Result<String> {
    let json = if compact {
        document.to_json()?
    } else {
        document.to_json_pretty()?
    };
    Ok(json)
}

/// Writes `contents` to `path` in one go, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PlaybillError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| PlaybillError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Runs every stage. `generated_at` is the timestamp captured when the run
/// started.
pub fn run_pipeline(config: &BuildConfig, generated_at: DateTime<Utc>) -> Result<BuildResult> {
    let ingest_start = Instant::now();
    let rows = info_span!("ingest", input = %config.input.display())
        .in_scope(|| ingest(&config.input))?;
    info!(
        rows = rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let normalize_start = Instant::now();
    let outcome = info_span!("normalize").in_scope(|| normalize(&rows))?;
    info!(
        emitted = outcome.emitted(),
        skipped = outcome.skipped(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );

    let rows_read = rows.len().saturating_sub(1);
    let NormalizeOutcome {
        records,
        diagnostics,
    } = outcome;
    let emitted = records.len();
    let document = OutputDocument::new(records, config.source.clone(), generated_at);

    let output = info_span!("output", output = %config.output.display()).in_scope(
        || -> Result<Option<PathBuf>> {
            let json = render(&document, config.compact)?;
            if config.dry_run {
                info!(bytes = json.len(), "dry run, output not written");
                return Ok(None);
            }
            write_output(&config.output, &json)?;
            info!(
                shows = emitted,
                generated_at = %format_timestamp(&generated_at),
                "wrote {} shows to {}",
                emitted,
                config.output.display()
            );
            Ok(Some(config.output.clone()))
        },
    )?;

    Ok(BuildResult {
        input: config.input.clone(),
        output,
        source: config.source.clone(),
        generated_at,
        rows_read,
        emitted,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn normalize_needs_a_data_row() {
        let rows = vec![row(&["Datum", "Nazev"])];
        let err = normalize(&rows).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlaybillError>(),
            Some(PlaybillError::NotEnoughRows { found: 1 })
        ));
    }

    #[test]
    fn normalize_reports_missing_columns() {
        let rows = vec![row(&["Datum", "Nazev"]), row(&["2024-01-01", "Hamlet"])];
        let err = normalize(&rows).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlaybillError>(),
            Some(PlaybillError::MissingColumns { .. })
        ));
    }
}
