//! The JSON document consumed by the static site.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::ShowRecord;

/// Schema version written into every document.
pub const SCHEMA_VERSION: u32 = 1;

/// Logical name of the input the document is built from.
pub const DEFAULT_SOURCE: &str = "data/shows.csv";

/// Records plus provenance metadata. Built once per run, then serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub version: u32,
    #[serde(with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub shows: Vec<ShowRecord>,
}

impl OutputDocument {
    pub fn new(
        shows: Vec<ShowRecord>,
        source: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION,
            generated_at,
            source: source.into(),
            shows,
        }
    }

    /// Serializes the document with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the document on a single line.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

/// Formats a timestamp the way `generatedAt` is written.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
