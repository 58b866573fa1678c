use chrono::Weekday;

/// Canonical names of the seven weekday lists, Monday first.
///
/// A board list whose name is not in this set is not part of the rota and
/// is ignored when the list collection is fetched.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Canonical list name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// One weekday bucket on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardList {
    pub name: String,
    pub id: String,
}
