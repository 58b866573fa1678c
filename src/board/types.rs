use serde::Deserialize;
use std::fmt;

/// List record as returned by the board API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawList {
    pub name: String,
    pub id: String,
}

/// Task record as returned by the board API.
///
/// `desc` is the free-text description carrying the recurrence rule.
/// `due` is absent for tasks without a due date.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
}

/// Label attached to a task.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    #[serde(default)]
    pub name: String,
}

/// Target slot for a reposition command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => write!(f, "top"),
            Position::Bottom => write!(f, "bottom"),
        }
    }
}
