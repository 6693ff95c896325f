//! Attendance log ingestion.
//!
//! Turns raw CSV text into [`RawRow`]s. No column semantics live here; see
//! `playbill-normalization` for header resolution and coercion.
//!
//! [`RawRow`]: playbill_model::RawRow

pub mod csv;

pub use csv::{QuoteState, parse_csv, read_csv_rows, read_csv_text, split_header};
