//! CSV tokenizing and file loading.

mod parser;
mod reader;

pub use parser::{QuoteState, parse_csv};
pub use reader::{read_csv_rows, read_csv_text, split_header};
