//! Raw and normalized row types.

use serde::{Deserialize, Serialize, Serializer};

/// One parsed CSV row: cells in file order, untrimmed.
pub type RawRow = Vec<String>;

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One attended performance.
///
/// `date` and `title` are never empty; every other field always carries a
/// value (possibly empty, or `None` for `rating`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRecord {
    pub date: String,
    pub title: String,
    pub theatre: String,
    pub place: String,
    pub city: String,
    pub host: bool,
    pub removed: bool,
    pub genres: Vec<String>,
    /// Nominally 0-100 but deliberately not clamped.
    #[serde(serialize_with = "serialize_rating")]
    pub rating: Option<f64>,
    pub comment: String,
}

/// Writes whole ratings as JSON integers (`92`, not `92.0`).
fn serialize_rating<S>(rating: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match rating {
        Some(value) if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}
