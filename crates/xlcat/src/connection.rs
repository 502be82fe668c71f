//! Workbook connections - one driver session per operation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};

use crate::error::{ReadError, Result};
use crate::format::FileFormat;

/// An open driver session over one workbook file.
///
/// Opening is eager: the driver parses the container during `open`, so a
/// missing file, a locked file, or non-spreadsheet content fails here and
/// not on first use. The session is scoped to a single operation and is
/// released when the connection is dropped, on every exit path.
///
/// The enum is the backend seam: every format-specific decision lives in
/// this module, so an alternative spreadsheet backend would replace only
/// the variants while the filtering and error taxonomy stay untouched.
pub enum WorkbookConnection {
    /// Session over the legacy binary container
    LegacyBinary(Xls<BufReader<File>>),
    /// Session over the zipped-XML container
    OpenXml(Xlsx<BufReader<File>>),
}

impl std::fmt::Debug for WorkbookConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookConnection::LegacyBinary(_) => f.write_str("LegacyBinary(..)"),
            WorkbookConnection::OpenXml(_) => f.write_str("OpenXml(..)"),
        }
    }
}

impl WorkbookConnection {
    /// Validate the path and open a driver session in the given dialect
    pub fn open(format: FileFormat, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ReadError::EmptyPath);
        }

        let open_failed = |source: calamine::Error| ReadError::WorkbookOpen {
            path: path.display().to_string(),
            source,
        };

        match format {
            FileFormat::LegacyBinary => {
                let workbook: Xls<_> =
                    open_workbook(path).map_err(|e: calamine::XlsError| open_failed(e.into()))?;
                Ok(WorkbookConnection::LegacyBinary(workbook))
            }
            FileFormat::OpenXml => {
                let workbook: Xlsx<_> =
                    open_workbook(path).map_err(|e: calamine::XlsxError| open_failed(e.into()))?;
                Ok(WorkbookConnection::OpenXml(workbook))
            }
        }
    }

    /// The driver catalog: raw worksheet names, in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            WorkbookConnection::LegacyBinary(wb) => wb.sheet_names(),
            WorkbookConnection::OpenXml(wb) => wb.sheet_names(),
        }
    }

    /// Full-table query against one named worksheet
    pub fn worksheet_range(
        &mut self,
        name: &str,
    ) -> std::result::Result<Range<Data>, calamine::Error> {
        match self {
            WorkbookConnection::LegacyBinary(wb) => {
                wb.worksheet_range(name).map_err(Into::into)
            }
            WorkbookConnection::OpenXml(wb) => wb.worksheet_range(name).map_err(Into::into),
        }
    }
}
