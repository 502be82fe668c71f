//! Error types for workbook reads.

use thiserror::Error;

/// Result type for read operations
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors surfaced by the read operations.
///
/// Driver errors are always wrapped into one of these kinds with the
/// original error preserved as the source; nothing is passed through raw.
#[derive(Debug, Error)]
pub enum ReadError {
    /// No path was supplied
    #[error("unable to open the specified file")]
    EmptyPath,

    /// The driver could not open the workbook file (missing file,
    /// non-spreadsheet content, permissions, wrong container format)
    #[error("unable to open the specified file `{path}`")]
    WorkbookOpen {
        /// The path that failed to open
        path: String,
        /// The driver error
        #[source]
        source: calamine::Error,
    },

    /// The workbook opened, but the requested worksheet could not be read
    #[error("unable to open the specified worksheet `{sheet}`")]
    SheetNotFound {
        /// The worksheet that was requested
        sheet: String,
        /// The driver error
        #[source]
        source: calamine::Error,
    },
}
