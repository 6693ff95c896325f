//! Property tests for the CSV tokenizer.

use playbill_ingest::parse_csv;
use proptest::prelude::*;

/// Plain cells: no quotes, separators, or line breaks.
fn plain_cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ;|.%-]{0,12}"
}

fn blank_line() -> impl Strategy<Value = String> {
    "[ ,\t]{0,6}"
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

proptest! {
    #[test]
    fn plain_rows_keep_cell_count(cells in prop::collection::vec(plain_cell(), 1..8)) {
        prop_assume!(cells.iter().any(|c| !c.trim().is_empty()));
        let line = cells.join(",");
        let rows = parse_csv(&format!("{line}\n"));
        prop_assert_eq!(rows, vec![cells]);
    }

    #[test]
    fn quoted_cells_are_preserved(cell in "[a-z,\"\n ]{1,16}") {
        prop_assume!(!cell.trim().is_empty());
        let text = format!("{},end\n", quote(&cell));
        let rows = parse_csv(&text);
        prop_assert_eq!(rows, vec![vec![cell, "end".to_string()]]);
    }

    #[test]
    fn blank_lines_never_appear(
        before in prop::collection::vec(blank_line(), 0..3),
        between in prop::collection::vec(blank_line(), 0..3),
        after in prop::collection::vec(blank_line(), 0..3),
    ) {
        let mut lines = before.clone();
        lines.push("a,b".to_string());
        lines.extend(between.iter().cloned());
        lines.push("c,d".to_string());
        lines.extend(after.iter().cloned());
        let rows = parse_csv(&lines.join("\n"));
        prop_assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn line_endings_do_not_change_rows(cells in prop::collection::vec(plain_cell(), 1..5)) {
        prop_assume!(cells.iter().any(|c| !c.trim().is_empty()));
        let line = cells.join(",");
        let unix = parse_csv(&format!("{line}\n{line}\n"));
        let windows = parse_csv(&format!("{line}\r\n{line}\r\n"));
        prop_assert_eq!(unix, windows);
    }
}
