//! The read operations: enumerate sheets, read one sheet, read all sheets.

use std::path::Path;

use calamine::{Data, Range};

use xlcat_table::{CellValue, Column, ColumnType, Table, Workbook};

use crate::connection::WorkbookConnection;
use crate::error::{ReadError, Result};
use crate::format::FileFormat;
use crate::names::SheetNameFilter;

/// Stateless reader exposing the workbook read operations.
///
/// Every call opens, uses, and drops its own driver session; there is no
/// cache or pool, so a reader can be shared freely across threads. The
/// only state is the catalog filtering rules.
#[derive(Debug, Clone, Default)]
pub struct WorkbookReader {
    filter: SheetNameFilter,
}

impl WorkbookReader {
    /// Reader with the default catalog filtering rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader with custom catalog filtering rules
    pub fn with_filter(filter: SheetNameFilter) -> Self {
        Self { filter }
    }

    /// List the logical worksheet names of a workbook, in catalog order.
    ///
    /// A workbook with zero qualifying sheets yields an empty list, not
    /// an error.
    pub fn sheet_names(
        &self,
        format: FileFormat,
        path: impl AsRef<Path>,
    ) -> Result<Vec<String>> {
        let conn = WorkbookConnection::open(format, path)?;
        Ok(self.filter.apply(conn.sheet_names()))
    }

    /// Read one worksheet into a table named after the requested sheet.
    ///
    /// Connection errors propagate unchanged; a failure of the sheet
    /// query itself (absent sheet included) becomes
    /// [`ReadError::SheetNotFound`] with the driver error as cause.
    pub fn read_sheet(
        &self,
        format: FileFormat,
        path: impl AsRef<Path>,
        sheet: &str,
    ) -> Result<Table> {
        let mut conn = WorkbookConnection::open(format, path)?;
        let range = conn
            .worksheet_range(sheet)
            .map_err(|source| ReadError::SheetNotFound {
                sheet: sheet.to_string(),
                source,
            })?;
        Ok(materialize(sheet, &range))
    }

    /// Read every worksheet into a workbook, in catalog order.
    ///
    /// All-or-nothing: the first failing sheet aborts the whole read and
    /// no partial workbook is returned. Each sub-call opens its own
    /// independent connection.
    pub fn read_workbook(
        &self,
        format: FileFormat,
        path: impl AsRef<Path>,
    ) -> Result<Workbook> {
        let path = path.as_ref();
        let mut workbook = Workbook::new();
        for name in self.sheet_names(format, path)? {
            workbook.push(self.read_sheet(format, path, &name)?);
        }
        Ok(workbook)
    }
}

/// Materialize a driver result range into a table.
///
/// The first row of the range is the header row; the remaining rows are
/// data. Column types are inferred from the data cells.
fn materialize(sheet: &str, range: &Range<Data>) -> Table {
    let mut row_iter = range.rows();

    let header: Vec<String> = match row_iter.next() {
        Some(cells) => cells
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(i, cell))
            .collect(),
        None => Vec::new(),
    };

    let mut types = vec![ColumnType::Null; header.len()];
    let mut body: Vec<Vec<CellValue>> = Vec::new();
    for cells in row_iter {
        let values: Vec<CellValue> = cells.iter().map(convert_cell).collect();
        for (ty, value) in types.iter_mut().zip(&values) {
            *ty = ty.unify(ColumnType::of(value));
        }
        body.push(values);
    }

    let columns = header
        .into_iter()
        .zip(types)
        .map(|(name, ty)| Column::new(name, ty))
        .collect();

    let mut table = Table::new(sheet, columns);
    for row in body {
        table.push_row(row);
    }
    table
}

/// Column name from a header cell.
///
/// Unnamed columns get the driver convention name `F1`, `F2`, ...
fn header_name(index: usize, cell: &Data) -> String {
    let text = cell.to_string();
    let text = text.trim();
    if text.is_empty() {
        format!("F{}", index + 1)
    } else {
        text.to_string()
    }
}

/// Convert a driver-typed cell into a model cell value
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#ERROR: {:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell_scalars() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Null);
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(convert_cell(&Data::Float(1.5)), CellValue::Float(1.5));
        assert_eq!(
            convert_cell(&Data::String("x".to_string())),
            CellValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_header_name_fallback() {
        assert_eq!(header_name(0, &Data::String("Name".to_string())), "Name");
        assert_eq!(header_name(0, &Data::Empty), "F1");
        assert_eq!(header_name(2, &Data::String("  ".to_string())), "F3");
        assert_eq!(header_name(1, &Data::Float(2024.0)), "2024");
    }

    #[test]
    fn test_materialize_infers_column_types() {
        let cells = vec![
            ((0, 0), Data::String("Name".to_string())),
            ((0, 1), Data::String("Score".to_string())),
            ((0, 2), Data::String("Mixed".to_string())),
            ((1, 0), Data::String("Alice".to_string())),
            ((1, 1), Data::Float(95.5)),
            ((1, 2), Data::Float(1.0)),
            ((2, 0), Data::String("Bob".to_string())),
            ((2, 1), Data::Float(87.0)),
            ((2, 2), Data::String("n/a".to_string())),
        ];
        let range = Range::from_sparse(
            cells
                .into_iter()
                .map(|(pos, data)| calamine::Cell::new(pos, data))
                .collect(),
        );

        let table = materialize("scores", &range);

        assert_eq!(table.name(), "scores");
        assert_eq!(table.len(), 2);
        let types: Vec<ColumnType> = table.columns().iter().map(|c| c.ty).collect();
        assert_eq!(
            types,
            vec![ColumnType::Text, ColumnType::Float, ColumnType::Text]
        );
        assert_eq!(table.value(1, "Score"), Some(&CellValue::Float(87.0)));
    }

    #[test]
    fn test_materialize_empty_range() {
        let range: Range<Data> = Range::empty();
        let table = materialize("empty", &range);

        assert_eq!(table.name(), "empty");
        assert_eq!(table.width(), 0);
        assert!(table.is_empty());
    }
}
