//! Tables - named, typed columns over ordered rows.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// No non-empty cell seen
    Null,
    /// Boolean column
    Bool,
    /// Integer column
    Int,
    /// Floating-point column
    Float,
    /// Text column
    Text,
    /// Date/time column
    DateTime,
}

impl ColumnType {
    /// The type of a single cell value
    pub fn of(value: &CellValue) -> Self {
        match value {
            CellValue::Null => ColumnType::Null,
            CellValue::Bool(_) => ColumnType::Bool,
            CellValue::Int(_) => ColumnType::Int,
            CellValue::Float(_) => ColumnType::Float,
            CellValue::Text(_) => ColumnType::Text,
            CellValue::DateTime(_) => ColumnType::DateTime,
        }
    }

    /// Combine the types of two cells from the same column.
    ///
    /// `Null` unifies with anything, integers widen to floats, and any
    /// other disagreement degrades the column to `Text` (the mixed-mode
    /// behavior of spreadsheet drivers).
    pub fn unify(self, other: Self) -> Self {
        use ColumnType::*;
        match (self, other) {
            (a, b) if a == b => a,
            (Null, b) => b,
            (a, Null) => a,
            (Int, Float) | (Float, Int) => Float,
            _ => Text,
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from the header row)
    pub name: String,
    /// Inferred column type
    pub ty: ColumnType,
}

impl Column {
    /// Create a column
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One worksheet materialized as a relational table.
///
/// Columns are ordered as the sheet reported them; rows are ordered as
/// read. Every row holds exactly one value per column - `push_row` pads
/// short rows with `CellValue::Null` and truncates long ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given name and columns
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// The worksheet this table came from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The ordered rows
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padded or truncated to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Null);
        self.rows.push(row);
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a cell by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Compare schema and row data, ignoring the table name.
    ///
    /// This is the comparison the integration tests use to check a read
    /// result against an independently loaded copy of the same sheet.
    pub fn same_data(&self, other: &Table) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }
}
