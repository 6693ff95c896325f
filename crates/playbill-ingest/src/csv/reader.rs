//! Loading the attendance log from disk.

use std::io;
use std::path::Path;

use playbill_model::{PlaybillError, RawRow, Result};

use super::parser::parse_csv;

const UTF8_BOM: char = '\u{feff}';

/// Reads the whole file as UTF-8, dropping a leading byte-order mark.
pub fn read_csv_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PlaybillError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlaybillError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|e| PlaybillError::FileRead {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Reads and tokenizes the file.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let text = read_csv_text(path)?;
    let rows = parse_csv(&text);
    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        rows = rows.len(),
        "parsed CSV"
    );
    Ok(rows)
}

/// Splits parsed rows into the header and the data rows.
///
/// Fails unless there is a header and at least one data row.
pub fn split_header(rows: &[RawRow]) -> Result<(&RawRow, &[RawRow])> {
    match rows.split_first() {
        Some((header, data)) if !data.is_empty() => Ok((header, data)),
        _ => Err(PlaybillError::NotEnoughRows { found: rows.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        let rows = vec![vec!["A".to_string()], vec!["1".to_string()]];
        let (header, data) = split_header(&rows).expect("split");
        assert_eq!(header, &vec!["A".to_string()]);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_split_header_needs_data_row() {
        let rows = vec![vec!["A".to_string()]];
        let err = split_header(&rows).unwrap_err();
        assert!(matches!(err, PlaybillError::NotEnoughRows { found: 1 }));

        let err = split_header(&[]).unwrap_err();
        assert!(matches!(err, PlaybillError::NotEnoughRows { found: 0 }));
    }
}
