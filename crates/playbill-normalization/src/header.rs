//! Header resolution.

use std::collections::BTreeMap;

use playbill_model::{Column, PlaybillError, RawRow, Result};

/// Column positions resolved from the header row, built once per run.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    /// Indexed by `Column as usize`.
    positions: [usize; Column::ALL.len()],
    ignored: Vec<String>,
}

impl HeaderIndex {
    /// Resolves every required column in `header`.
    ///
    /// Names are trimmed and matched exactly; the first occurrence of a
    /// repeated name wins. Fails with every missing column listed when the
    /// header is incomplete.
    pub fn resolve(header: &RawRow) -> Result<Self> {
        let mut by_name: BTreeMap<&str, usize> = BTreeMap::new();
        for (idx, name) in header.iter().enumerate() {
            by_name.entry(name.trim()).or_insert(idx);
        }

        let mut positions = [0; Column::ALL.len()];
        let mut missing = Vec::new();
        for column in Column::ALL {
            match by_name.get(column.header_name()) {
                Some(&idx) => positions[column as usize] = idx,
                None => missing.push(column.header_name().to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(PlaybillError::MissingColumns { columns: missing });
        }

        let ignored = header
            .iter()
            .enumerate()
            .filter(|(idx, _)| !positions.contains(idx))
            .map(|(_, name)| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { positions, ignored })
    }

    /// Zero-based position of `column` in each row.
    pub fn position(&self, column: Column) -> usize {
        self.positions[column as usize]
    }

    /// Trimmed value of `column` in `row`; `""` when the row is too short.
    pub fn cell<'a>(&self, row: &'a RawRow, column: Column) -> &'a str {
        row.get(self.position(column)).map_or("", |cell| cell.trim())
    }

    /// Header names not used for lookup: extra columns and repeated
    /// required headings after their first occurrence.
    pub fn ignored_columns(&self) -> &[String] {
        &self.ignored
    }
}
