//! Normalization of raw attendance-log rows into [`ShowRecord`]s.
//!
//! Two independent checkpoints:
//!
//! 1. [`HeaderIndex::resolve`] checks the header once for every required
//!    column. Failure aborts the run before any row is looked at.
//! 2. [`normalize_row`] coerces one data row and rejects it when the date or
//!    title is empty. Rejections are collected, never fatal.
//!
//! [`ShowRecord`]: playbill_model::ShowRecord

pub mod coerce;
pub mod header;
pub mod normalize;

pub use coerce::{GENRE_DELIMITERS, TRUTHY_TOKENS, parse_flag, parse_genres, parse_rating};
pub use header::HeaderIndex;
pub use normalize::{
    FIRST_DATA_ROW, NormalizeOutcome, normalize_resolved, normalize_row, normalize_rows,
};
