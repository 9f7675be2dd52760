//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationReference;

/// Query for station search.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query, e.g. "14th st" or "f21"
    #[serde(default)]
    pub q: String,
}

/// A station in search results.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationResult {
    pub id: String,
    pub name: String,
}

impl From<&StationReference> for StationResult {
    fn from(station: &StationReference) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
        }
    }
}

/// Ranked station search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// Request to switch the board to another station.
#[derive(Debug, Deserialize)]
pub struct ChangeStationRequest {
    pub id: String,

    /// Display name. Looked up in the station directory when omitted.
    pub name: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
