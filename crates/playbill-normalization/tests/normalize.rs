//! Integration tests for row normalization.

use playbill_model::{Column, PlaybillError, RawRow, RowDiagnostic, SkipReason};
use playbill_normalization::{HeaderIndex, normalize_resolved, normalize_rows, parse_flag};
use proptest::prelude::*;

fn row(cells: &[&str]) -> RawRow {
    cells.iter().map(|s| (*s).to_string()).collect()
}

fn header() -> RawRow {
    Column::ALL
        .iter()
        .map(|c| c.header_name().to_string())
        .collect()
}

fn show(date: &str, title: &str) -> RawRow {
    row(&[date, title, "Troupe", "Stage", "Brno", "", "", "drama", "80%", ""])
}

#[test]
fn empty_title_row_is_skipped_and_order_kept() {
    let rows = vec![
        show("2024-01-01", "Hamlet"),
        show("2024-01-02", ""),
        show("2024-01-03", "Faust"),
        show("", "Nora"),
        show("2024-01-05", "Rusalka"),
    ];

    let outcome = normalize_rows(&header(), &rows).unwrap();

    let titles: Vec<&str> = outcome.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Hamlet", "Faust", "Rusalka"]);
    assert_eq!(
        outcome.diagnostics,
        vec![
            RowDiagnostic {
                row: 3,
                reason: SkipReason::MissingTitle
            },
            RowDiagnostic {
                row: 5,
                reason: SkipReason::MissingDate
            },
        ]
    );
    assert_eq!(outcome.emitted(), 3);
    assert_eq!(outcome.skipped(), 2);
}

#[test]
fn missing_column_produces_no_records() {
    let mut names = header();
    names.retain(|name| name != "Hodnoceni");
    let rows = vec![show("2024-01-01", "Hamlet")];

    let err = normalize_rows(&names, &rows).unwrap_err();
    match err {
        PlaybillError::MissingColumns { columns } => assert_eq!(columns, vec!["Hodnoceni"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reordered_header_with_extras() {
    let names = row(&[
        "Komentar",
        "Extra",
        "Hodnoceni",
        "Zanry",
        "StazenoZR",
        "Hostovacka",
        "Mesto",
        "Misto",
        "Soubor",
        "Nazev",
        "Datum",
    ]);
    let index = HeaderIndex::resolve(&names).unwrap();
    let rows = vec![row(&[
        "Loved it",
        "ignored",
        "95 %",
        "Opera | Ballet",
        "yes",
        "0",
        "Praha",
        "Narodni divadlo",
        "ND",
        "Rusalka",
        "2023-11-11",
    ])];

    let outcome = normalize_resolved(&index, &rows);
    let record = &outcome.records[0];
    assert_eq!(record.title, "Rusalka");
    assert_eq!(record.city, "Praha");
    assert!(!record.host);
    assert!(record.removed);
    assert_eq!(record.genres, vec!["opera", "ballet"]);
    assert_eq!(record.rating, Some(95.0));
    assert_eq!(record.comment, "Loved it");
}

#[test]
fn inputs_are_not_mutated_and_output_is_deterministic() {
    let rows = vec![show("2024-01-01", "Hamlet"), show("", "")];
    let before = rows.clone();
    let first = normalize_rows(&header(), &rows).unwrap();
    let second = normalize_rows(&header(), &rows).unwrap();
    assert_eq!(rows, before);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn truthy_tokens_ignore_case(
        token in prop::sample::select(vec!["a", "y", "yes", "true", "1"]),
        upper in prop::collection::vec(any::<bool>(), 4),
    ) {
        let mixed: String = token
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert!(parse_flag(&mixed));
    }

    #[test]
    fn other_words_are_false(word in "[b-xz]{2,6}") {
        prop_assume!(word != "true");
        prop_assert!(!parse_flag(&word));
    }
}
