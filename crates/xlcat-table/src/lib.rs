//! xlcat-table - Relational table model
//!
//! This crate provides the in-memory table types produced by workbook
//! reads: typed cell values, named columns, tables, and the ordered
//! table collection that represents a whole workbook.
//!
//! The types are plain data: created by a read, never mutated afterwards,
//! and comparable for the kind of fixture-vs-result checks the test
//! suites rely on.

pub mod table;
pub mod value;
pub mod workbook;

// Re-exports
pub use table::{Column, ColumnType, Table};
pub use value::CellValue;
pub use workbook::Workbook;
