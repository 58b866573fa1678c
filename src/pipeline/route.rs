use chrono::{DateTime, Datelike, Utc};

use crate::error::{Result, RotaError};
use crate::model::{self, BoardList};

/// Find the board list named for the weekday of `due`.
///
/// Fails when the board is missing the expected weekday list.
pub fn target_list<'a>(due: DateTime<Utc>, lists: &'a [BoardList]) -> Result<&'a BoardList> {
    let name = model::weekday_name(due.weekday());
    lists
        .iter()
        .find(|list| list.name == name)
        .ok_or_else(|| RotaError::MissingList(name.to_string()))
}
