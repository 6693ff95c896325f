//! Single-pass CSV tokenizer.
//!
//! Dialect: comma separator, newline row terminator, double-quote quoting
//! with `""` as an escaped quote. Carriage returns outside quotes are
//! dropped, so CRLF and bare CR input both work. Quoted cells may contain
//! commas and newlines.
//!
//! Malformed quoting is accepted as-is: an unterminated quote simply runs
//! to the end of input.

use playbill_model::RawRow;

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Unquoted,
    Quoted,
}

/// Parses CSV text into rows of untrimmed cells.
///
/// Rows whose cells are all blank (empty lines, lines of only commas and
/// whitespace) are dropped wherever they occur. Row lengths are not checked.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut rows = Vec::new();
    let mut row = RawRow::new();
    let mut cell = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            QuoteState::Quoted => match c {
                '"' if chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => state = QuoteState::Unquoted,
                _ => cell.push(c),
            },
            QuoteState::Unquoted => match c {
                '"' => state = QuoteState::Quoted,
                ',' => row.push(std::mem::take(&mut cell)),
                '\n' => {
                    row.push(std::mem::take(&mut cell));
                    finish_row(&mut rows, std::mem::take(&mut row));
                }
                '\r' => {}
                _ => cell.push(c),
            },
        }
    }

    row.push(cell);
    finish_row(&mut rows, row);
    rows
}

fn finish_row(rows: &mut Vec<RawRow>, row: RawRow) {
    if row.iter().any(|cell| !cell.trim().is_empty()) {
        rows.push(row);
    }
}
