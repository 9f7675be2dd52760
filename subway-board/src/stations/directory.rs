//! Station list parsing.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{StationId, StationReference};

use super::error::StationError;
use super::search::search_stations;

/// Separator between id and name on each line.
const SEPARATOR: &str = " - ";

/// Lower-cased prefixes that mark a line as a header or comment.
const HEADER_TOKENS: &[&str] = &["#", "id - ", "stop_id"];

/// Parse a station list into references, in source order.
///
/// Each non-empty line is `<id> - <name>`. The line is split on the first
/// separator only, so names may themselves contain " - ". Header lines,
/// lines without a separator, and lines with an empty id or name are
/// skipped. When an id appears more than once, the first occurrence wins.
///
/// # Examples
///
/// ```
/// use subway_board::stations::parse_station_list;
///
/// let stations = parse_station_list("ID - Name\n101 - Van Cortlandt Park - 242 St\n");
/// assert_eq!(stations.len(), 1);
/// assert_eq!(stations[0].id.as_str(), "101");
/// assert_eq!(stations[0].name, "Van Cortlandt Park - 242 St");
/// ```
pub fn parse_station_list(raw: &str) -> Vec<StationReference> {
    let mut seen = HashSet::new();

    raw.lines()
        .filter_map(parse_line)
        .filter(|station| {
            let first = seen.insert(station.id.clone());
            if !first {
                debug!(id = %station.id, name = %station.name, "dropping duplicate station id");
            }
            first
        })
        .collect()
}

fn parse_line(line: &str) -> Option<StationReference> {
    let line = line.trim();
    if line.is_empty() || is_header(line) {
        return None;
    }

    let (id, name) = line.split_once(SEPARATOR)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let id = StationId::parse(id).ok()?;
    Some(StationReference::new(id, name))
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_TOKENS.iter().any(|token| lower.starts_with(token))
}

/// The in-memory station directory.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<StationReference>,
}

impl StationDirectory {
    /// Build a directory from station list text.
    pub fn parse(raw: &str) -> Self {
        Self {
            stations: parse_station_list(raw),
        }
    }

    /// Load a directory from a station list file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::parse(&raw);
        info!(path = ?path, count = directory.len(), "loaded station directory");
        Ok(directory)
    }

    /// Load a directory, falling back to an empty one if the file cannot be
    /// read.
    pub fn load_file_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load_file(path).unwrap_or_else(|e| {
            warn!(error = %e, "station search disabled");
            Self::empty()
        })
    }

    /// An empty directory. Every search against it is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&StationReference> {
        self.stations.iter().find(|s| &s.id == id)
    }

    /// Ranked fuzzy search over the directory.
    pub fn search(&self, query: &str) -> Vec<&StationReference> {
        search_stations(&self.stations, query)
    }

    /// All stations, in source order.
    pub fn stations(&self) -> &[StationReference] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn parses_lines_in_source_order() {
        let stations = parse_station_list("F21 - Carroll St\nA32 - W 4 St\n101 - Van Cortlandt Park - 242 St");

        let ids: Vec<_> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["F21", "A32", "101"]);
        assert_eq!(stations[1].name, "W 4 St");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let stations = parse_station_list("101 - Van Cortlandt Park - 242 St");
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, id("101"));
        assert_eq!(stations[0].name, "Van Cortlandt Park - 242 St");
    }

    #[test]
    fn trims_whitespace() {
        let stations = parse_station_list("   F21   -   Carroll St   \r\n");
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, id("F21"));
        assert_eq!(stations[0].name, "Carroll St");
    }

    #[test]
    fn skips_headers_and_blank_lines() {
        let raw = "ID - Name\n\n# generated list\nstop_id - stop_name\n   \nF21 - Carroll St\n";
        let stations = parse_station_list(raw);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, id("F21"));
    }

    #[test]
    fn discards_malformed_lines() {
        let raw = "F21,Carroll St\nF22-Smith 9 Sts\nF23 -\n - Nameless\nF24 - 4 Av";
        let stations = parse_station_list(raw);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, id("F24"));
    }

    #[test]
    fn first_duplicate_wins() {
        let raw = "F21 - Carroll St\nF21 - Something Else\nF22 - Smith-9 Sts";
        let stations = parse_station_list(raw);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Carroll St");
        assert_eq!(stations[1].id, id("F22"));
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(parse_station_list("").is_empty());
        assert!(parse_station_list("\n\n").is_empty());
    }

    #[test]
    fn directory_get_by_id() {
        let dir = StationDirectory::parse("F21 - Carroll St\nA32 - W 4 St");
        assert_eq!(dir.get(&id("A32")).map(|s| s.name.as_str()), Some("W 4 St"));
        assert!(dir.get(&id("Z99")).is_none());
    }

    #[test]
    fn load_file_reads_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.txt");
        std::fs::write(&path, "ID - Name\nF21 - Carroll St\nA32 - W 4 St\n").unwrap();

        let directory = StationDirectory::load_file(&path).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.stations()[0].name, "Carroll St");
    }

    #[test]
    fn bundled_station_list_loads() {
        let directory = StationDirectory::load_file("data/stations.txt").unwrap();
        assert!(directory.len() > 50);
        assert_eq!(
            directory.get(&id("F21")).map(|s| s.name.as_str()),
            Some("Carroll St")
        );
        assert_eq!(
            directory.get(&id("101")).map(|s| s.name.as_str()),
            Some("Van Cortlandt Park - 242 St")
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = StationDirectory::load_file("/nonexistent/path/stations.txt");
        assert!(matches!(result, Err(StationError::Io { .. })));
    }

    #[test]
    fn unreadable_file_falls_back_to_empty() {
        let directory = StationDirectory::load_file_or_empty("/nonexistent/path/stations.txt");
        assert!(directory.is_empty());
    }

    #[test]
    fn empty_directory_searches_empty() {
        let dir = StationDirectory::empty();
        assert!(dir.is_empty());
        assert!(dir.search("carroll").is_empty());
    }
}
