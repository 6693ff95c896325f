//! Cell value coercions.
//!
//! None of these fail: unrecognized input degrades to `false`, an empty
//! list, or `None`.

/// Tokens accepted as `true`, compared case-insensitively.
pub const TRUTHY_TOKENS: [&str; 5] = ["A", "Y", "YES", "TRUE", "1"];

/// Characters that separate genres. They are interchangeable.
pub const GENRE_DELIMITERS: [char; 3] = [';', '|', ','];

/// Parses a boolean cell. Anything outside [`TRUTHY_TOKENS`] is `false`.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    TRUTHY_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(value))
}

/// Splits a genre cell into trimmed, lowercased genres.
///
/// Order is kept and duplicates are not removed.
pub fn parse_genres(value: &str) -> Vec<String> {
    let value = value.trim();
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(GENRE_DELIMITERS)
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parses a rating cell, allowing a trailing `%`.
///
/// Empty or non-numeric input yields `None`. The value is not clamped to
/// 0-100.
pub fn parse_rating(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix('%').unwrap_or(value).trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
