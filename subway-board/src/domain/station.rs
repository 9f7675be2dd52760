//! Station identifiers and references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A feed station id such as `F21` or `A32`.
///
/// Ids are non-empty and limited to ASCII letters, digits, `-` and `_`,
/// since they are interpolated directly into the feed URL path. Several ids
/// may be joined with commas to query more than one platform complex at once.
///
/// # Examples
///
/// ```
/// use subway_board::domain::StationId;
///
/// let carroll = StationId::parse("F21").unwrap();
/// assert_eq!(carroll.as_str(), "F21");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationId::parse("  F21 ").unwrap().as_str(), "F21");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("F2 1").is_err());
/// assert!(StationId::parse("F21/../x").is_err());
/// assert!(StationId::parse("F21?x=1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if !trimmed.chars().all(is_id_char) {
            return Err(InvalidStationId {
                reason: "may only contain ASCII letters, digits, ',', '-' or '_'",
            });
        }

        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ',' | '-' | '_')
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationId::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as listed in the station directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReference {
    pub id: StationId,
    pub name: String,
}

impl StationReference {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Name as shown on the board header.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}
