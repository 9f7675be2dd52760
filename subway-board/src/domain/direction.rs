//! Direction of travel.

use std::fmt;

use serde::Serialize;

/// Direction of travel, derived from which feed list (`N` or `S`) a train
/// appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Northbound,
    Southbound,
}

impl Direction {
    /// Label used as the destination heading on the board.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Northbound => "NORTHBOUND",
            Direction::Southbound => "SOUTHBOUND",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
