//! Error types produced while loading tabular data.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors produced while reading order or courier tables.
///
/// Malformed rows and unparseable values are not errors; they are logged and
/// dropped or defaulted. Only failures that prevent reading the table at all
/// are reported.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read CSV header: {source}")]
    Header {
        /// Underlying CSV error.
        source: csv::Error,
    },
    /// Reading a data row failed at the I/O level.
    #[error("failed to read CSV row: {source}")]
    Read {
        /// Underlying CSV error.
        source: csv::Error,
    },
}
