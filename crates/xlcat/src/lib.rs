//! # xlcat
//!
//! Read legacy binary (`.xls`) and Open XML (`.xlsx`) Excel workbooks into
//! in-memory relational tables, without the originating application
//! installed. File parsing is delegated to the `calamine` driver; this
//! crate adds the read API on top: connection acquisition, sheet-name
//! hygiene, and a small error taxonomy.
//!
//! ## Operations
//!
//! - **Enumerate sheets**: [`WorkbookReader::sheet_names`]
//! - **Read one sheet**: [`WorkbookReader::read_sheet`]
//! - **Read all sheets**: [`WorkbookReader::read_workbook`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use xlcat::{FileFormat, WorkbookReader};
//!
//! let reader = WorkbookReader::new();
//!
//! // Enumerate the logical sheets
//! let names = reader.sheet_names(FileFormat::OpenXml, "data.xlsx")?;
//!
//! // Read one sheet into a table
//! let table = reader.read_sheet(FileFormat::OpenXml, "data.xlsx", "Sheet1")?;
//!
//! // Read the whole workbook
//! let workbook = reader.read_workbook(FileFormat::OpenXml, "data.xlsx")?;
//! ```

pub mod connection;
pub mod error;
pub mod format;
pub mod names;
pub mod reader;

// Re-exports
pub use connection::WorkbookConnection;
pub use error::{ReadError, Result};
pub use format::FileFormat;
pub use names::SheetNameFilter;
pub use reader::WorkbookReader;
