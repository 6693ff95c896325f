pub mod column;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod record;

pub use column::Column;
pub use diagnostic::{RowDiagnostic, SkipReason};
pub use document::{DEFAULT_SOURCE, OutputDocument, SCHEMA_VERSION, format_timestamp};
pub use error::{PlaybillError, Result};
pub use record::{RawRow, ShowRecord};
