//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station directory.
///
/// These are never fatal: callers fall back to an empty directory, which
/// makes every search come back empty.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The station list file could not be read
    #[error("failed to read station list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
