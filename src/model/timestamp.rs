use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Result, RotaError};

/// Wire format for due dates: UTC with a literal-zero millisecond field.
pub const DUE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Parse a due date from the wire format.
///
/// Anything that does not match [`DUE_FORMAT`] exactly, including a
/// non-zero millisecond field, is a parse failure.
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, DUE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| RotaError::DueFormat(raw.to_string()))
}

/// Render a due date in the wire format.
pub fn format_due(due: DateTime<Utc>) -> String {
    due.format(DUE_FORMAT).to_string()
}
