//! Workbooks - ordered, name-preserving collections of tables.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// All worksheets of one workbook file, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    tables: Vec<Table>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table, keeping insertion order
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// The tables, in the order they were read
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by its worksheet name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    /// The table names, in order
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name()).collect()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the workbook holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl IntoIterator for Workbook {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}
