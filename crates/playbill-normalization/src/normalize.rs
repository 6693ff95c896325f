//! Row normalization.

use playbill_model::{Column, RawRow, Result, RowDiagnostic, ShowRecord, SkipReason};
use tracing::{debug, warn};

use crate::coerce::{parse_flag, parse_genres, parse_rating};
use crate::header::HeaderIndex;

/// Row number of the first data row. The header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// Records that passed validation, plus one diagnostic per skipped row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOutcome {
    pub records: Vec<ShowRecord>,
    pub diagnostics: Vec<RowDiagnostic>,
}

impl NormalizeOutcome {
    pub fn emitted(&self) -> usize {
        self.records.len()
    }

    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Normalizes one data row.
///
/// `row_number` is only used to label the diagnostic when the row is
/// rejected for an empty date or title.
pub fn normalize_row(
    index: &HeaderIndex,
    row: &RawRow,
    row_number: usize,
) -> std::result::Result<ShowRecord, RowDiagnostic> {
    let date = index.cell(row, Column::Date);
    let title = index.cell(row, Column::Title);
    let reason = if date.is_empty() {
        Some(SkipReason::MissingDate)
    } else if title.is_empty() {
        Some(SkipReason::MissingTitle)
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(RowDiagnostic {
            row: row_number,
            reason,
        });
    }

    Ok(ShowRecord {
        date: date.to_string(),
        title: title.to_string(),
        theatre: index.cell(row, Column::Theatre).to_string(),
        place: index.cell(row, Column::Place).to_string(),
        city: index.cell(row, Column::City).to_string(),
        host: parse_flag(index.cell(row, Column::GuestPerformance)),
        removed: parse_flag(index.cell(row, Column::WithdrawnFromRepertoire)),
        genres: parse_genres(index.cell(row, Column::Genres)),
        rating: parse_rating(index.cell(row, Column::Rating)),
        comment: index.cell(row, Column::Comment).to_string(),
    })
}

/// Normalizes data rows against an already resolved header.
///
/// Output order follows input order; skipped rows are logged and recorded.
pub fn normalize_resolved(index: &HeaderIndex, data_rows: &[RawRow]) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    for (offset, row) in data_rows.iter().enumerate() {
        match normalize_row(index, row, FIRST_DATA_ROW + offset) {
            Ok(record) => outcome.records.push(record),
            Err(diagnostic) => {
                warn!(row = diagnostic.row, reason = %diagnostic.reason, "skipping row");
                outcome.diagnostics.push(diagnostic);
            }
        }
    }
    outcome
}

/// Resolves the header, then normalizes every data row.
///
/// A header missing required columns fails before any row is processed.
pub fn normalize_rows(header: &RawRow, data_rows: &[RawRow]) -> Result<NormalizeOutcome> {
    let index = HeaderIndex::resolve(header)?;
    if !index.ignored_columns().is_empty() {
        debug!(columns = ?index.ignored_columns(), "ignoring extra columns");
    }
    Ok(normalize_resolved(&index, data_rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    fn header() -> RawRow {
        row(&[
            "Datum",
            "Nazev",
            "Soubor",
            "Misto",
            "Mesto",
            "Hostovacka",
            "StazenoZR",
            "Zanry",
            "Hodnoceni",
            "Komentar",
        ])
    }

    #[test]
    fn test_normalize_full_row() {
        let index = HeaderIndex::resolve(&header()).unwrap();
        let record = normalize_row(
            &index,
            &row(&[
                "2024-01-01",
                "Hamlet",
                "Troupe",
                "Theatre",
                "City",
                "A",
                "N",
                "drama;tragedy",
                "92",
                "Great show",
            ]),
            2,
        )
        .unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert!(record.host);
        assert!(!record.removed);
        assert_eq!(record.genres, vec!["drama", "tragedy"]);
        assert_eq!(record.rating, Some(92.0));
        assert_eq!(record.comment, "Great show");
    }

    #[test]
    fn test_short_row_fills_defaults() {
        let index = HeaderIndex::resolve(&header()).unwrap();
        let record = normalize_row(&index, &row(&[" 2024-02-02 ", " Faust "]), 3).unwrap();
        assert_eq!(record.date, "2024-02-02");
        assert_eq!(record.title, "Faust");
        assert_eq!(record.theatre, "");
        assert!(!record.host);
        assert!(record.genres.is_empty());
        assert_eq!(record.rating, None);
    }

    #[test]
    fn test_missing_date_checked_first() {
        let index = HeaderIndex::resolve(&header()).unwrap();
        let err = normalize_row(&index, &row(&["  ", ""]), 7).unwrap_err();
        assert_eq!(
            err,
            RowDiagnostic {
                row: 7,
                reason: SkipReason::MissingDate
            }
        );
    }

    #[test]
    fn test_missing_title() {
        let index = HeaderIndex::resolve(&header()).unwrap();
        let err = normalize_row(&index, &row(&["2024-01-01", " "]), 4).unwrap_err();
        assert_eq!(err.reason, SkipReason::MissingTitle);
    }

    #[test]
    fn test_missing_column_fails_before_rows() {
        let mut names = header();
        names.retain(|name| name != "Zanry");
        let rows = vec![row(&["2024-01-01", "Hamlet"])];
        assert!(normalize_rows(&names, &rows).is_err());
    }
}
