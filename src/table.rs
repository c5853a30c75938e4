//! Extracted table structures

use crate::types::CellValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named table column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Column name, from a header row, a caller override, or synthesized
    /// as `"Column {n}"`
    pub name: String,
}

impl Column {
    /// Create a column with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Column { name: name.into() }
    }
}

/// The output of table extraction: ordered named columns and ordered rows
/// of positionally aligned values
///
/// Invariant: every row holds exactly one value per column.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub(crate) fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, cells: Vec<CellValue>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    /// Table name (the source worksheet's name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Ordered data rows
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Row at the given position (0-based)
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Value at (row, column) position, both 0-based
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_accessors() {
        let mut table = Table::new(
            "T",
            vec![Column::new("a"), Column::new("b")],
        );
        table.push_row(vec!["1".into(), "2".into()]);

        assert_eq!(table.name(), "T");
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("c"), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.value(0, 1).unwrap().as_string(), "2");
        assert_eq!(table.value(1, 0), None);
    }
}
