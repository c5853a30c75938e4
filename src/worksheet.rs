//! In-memory worksheet grid
//!
//! A [`Worksheet`] is a rectangular grid of [`CellValue`]s addressed by
//! 1-based `(row, column)` coordinates, with a populated bounding rectangle
//! ([`Dimension`]). It is the collaborator boundary of this crate: anything
//! that can materialize cells into a grid (an XLSX reader, a CSV loader,
//! test fixtures) can feed the extraction routines in [`crate::extract`].
//!
//! Reads are total: a coordinate outside the populated bounds yields
//! [`CellValue::Empty`] rather than an error, matching how spreadsheet
//! libraries expose cells outside the used range.

use crate::types::{Cell, CellValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static EMPTY: CellValue = CellValue::Empty;

/// Populated bounding rectangle of a worksheet, 1-based and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// First populated row
    pub start_row: u32,
    /// First populated column
    pub start_col: u32,
    /// Last populated row
    pub end_row: u32,
    /// Last populated column
    pub end_col: u32,
}

/// One sheet of a workbook: a named grid of cells
///
/// Rows are stored densely from row 1; writing a cell materializes the
/// cells left of and above it as [`CellValue::Empty`], the same way a
/// row-oriented loader fills a grid.
///
/// # Example
///
/// ```
/// use sheetable::{CellValue, Worksheet};
///
/// let mut sheet = Worksheet::new("People");
/// sheet.append_row(vec!["Name".into(), "Age".into()]);
/// sheet.append_row(vec!["Alice".into(), CellValue::Int(30)]);
///
/// assert_eq!(sheet.end_row(), 2);
/// assert_eq!(sheet.text(2, 1), "Alice");
/// assert_eq!(sheet.value(2, 2), &CellValue::Int(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    /// rows[r - 1][c - 1] holds the cell at (r, c)
    rows: Vec<Vec<CellValue>>,
}

impl Worksheet {
    /// Create an empty worksheet with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Worksheet {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a row of cells below the current last row
    pub fn append_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = CellValue>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// Set the value of the cell at (row, col), 1-based
    ///
    /// Grows the grid as needed; intermediate cells become
    /// [`CellValue::Empty`].
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        assert!(row >= 1 && col >= 1, "cell coordinates are 1-based");
        let row = row as usize - 1;
        let col = col as usize - 1;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, CellValue::default);
        }
        cells[col] = value;
    }

    /// Value of the cell at (row, col), 1-based
    ///
    /// Coordinates outside the populated bounds yield
    /// [`CellValue::Empty`].
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        if row == 0 || col == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row as usize - 1)
            .and_then(|cells| cells.get(col as usize - 1))
            .unwrap_or(&EMPTY)
    }

    /// Display text of the cell at (row, col)
    pub fn text(&self, row: u32, col: u32) -> String {
        self.value(row, col).as_string()
    }

    /// Positioned view of the cell at (row, col)
    pub fn cell(&self, row: u32, col: u32) -> Cell<'_> {
        Cell {
            row,
            col,
            value: self.value(row, col),
        }
    }

    /// Populated bounding rectangle, or `None` for a sheet with no cells
    pub fn dimension(&self) -> Option<Dimension> {
        let start_row = self.rows.iter().position(|cells| !cells.is_empty())?;
        let end_row = self.rows.iter().rposition(|cells| !cells.is_empty())?;
        let end_col = self.rows.iter().map(Vec::len).max()?;
        Some(Dimension {
            start_row: start_row as u32 + 1,
            start_col: 1,
            end_row: end_row as u32 + 1,
            end_col: end_col as u32,
        })
    }

    /// Last populated row, or 0 for an empty sheet
    pub fn end_row(&self) -> u32 {
        self.dimension().map(|d| d.end_row).unwrap_or(0)
    }

    /// Last populated column, or 0 for an empty sheet
    pub fn end_column(&self) -> u32 {
        self.dimension().map(|d| d.end_col).unwrap_or(0)
    }

    /// Returns true if the sheet contains no cells
    pub fn is_empty(&self) -> bool {
        self.dimension().is_none()
    }

    /// Delete `count` rows starting at `start_row` (1-based), shifting
    /// later rows up and shrinking the populated bounds
    pub fn delete_rows(&mut self, start_row: u32, count: u32) {
        if start_row == 0 || count == 0 {
            return;
        }
        let start = start_row as usize - 1;
        if start >= self.rows.len() {
            return;
        }
        let end = (start + count as usize).min(self.rows.len());
        self.rows.drain(start..end);
    }
}
