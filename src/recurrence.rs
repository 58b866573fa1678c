//! Recurrence rules parsed from free-text task descriptions.
//!
//! A rule is the leading `<integer> <word>` of a description, e.g.
//! `"2 weeks water the plants"`. The word is an open-ended unit token
//! resolved through a calendar-arithmetic table when the due date is
//! advanced, so new units only touch [`UNIT_TABLE`].

use chrono::{DateTime, Duration, Months, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, RotaError};

/// How far a task's due date moves each cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub count: u32,
    pub unit: String,
}

static RULE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Extract the leading `<integer> <word>` rule from a description.
///
/// Fails when the description does not start with the pattern or the
/// integer does not fit the count type. Both are recoverable per-task
/// errors; the caller logs and moves on.
pub fn parse(description: &str) -> Result<Rule> {
    let pattern = RULE_PATTERN.get_or_init(|| Regex::new(r"^(\d+) (\w+)").unwrap());
    let captures = pattern
        .captures(description)
        .ok_or_else(|| RotaError::RuleFormat(description.to_string()))?;
    let count = captures[1]
        .parse::<u32>()
        .map_err(|_| RotaError::RuleFormat(description.to_string()))?;
    Ok(Rule {
        count,
        unit: captures[2].to_string(),
    })
}

type PeriodAdd = fn(DateTime<Utc>, u32) -> Option<DateTime<Utc>>;

fn add_days(due: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
    due.checked_add_signed(Duration::days(i64::from(count)))
}

fn add_weeks(due: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
    due.checked_add_signed(Duration::weeks(i64::from(count)))
}

// Month and year lengths are calendar-dependent; chrono clamps the day of
// month when the target month is shorter (Jan 31 + 1 month = Feb 28).
fn add_months(due: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
    due.checked_add_months(Months::new(count))
}

fn add_years(due: DateTime<Utc>, count: u32) -> Option<DateTime<Utc>> {
    due.checked_add_months(Months::new(count.checked_mul(12)?))
}

/// Unit token to calendar-add function. Singular and plural are accepted.
const UNIT_TABLE: &[(&str, PeriodAdd)] = &[
    ("day", add_days),
    ("days", add_days),
    ("week", add_weeks),
    ("weeks", add_weeks),
    ("month", add_months),
    ("months", add_months),
    ("year", add_years),
    ("years", add_years),
];

fn period_add(unit: &str) -> Option<PeriodAdd> {
    UNIT_TABLE
        .iter()
        .find(|(token, _)| *token == unit)
        .map(|(_, add)| *add)
}

/// Advance `due` by whole periods until it is no longer before `now`.
///
/// Returns the smallest `due + k * period` (k >= 1 for a past due date)
/// at or after `now`. A zero count or unknown unit would never converge
/// and is rejected up front.
pub fn advance(due: DateTime<Utc>, rule: &Rule, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if rule.count == 0 {
        return Err(RotaError::ZeroCount);
    }
    let add = period_add(&rule.unit).ok_or_else(|| RotaError::UnknownUnit(rule.unit.clone()))?;

    let mut due = due;
    while due < now {
        due = add(due, rule.count).ok_or(RotaError::DateOverflow(due))?;
    }
    Ok(due)
}
