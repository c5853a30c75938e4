//! Convert spreadsheet worksheets into generic tables
//!
//! `sheetable` takes an in-memory worksheet (a 1-based grid of typed cell
//! values with a populated bounding rectangle) and shapes it into a
//! [`Table`]: ordered, named columns plus ordered rows of positionally
//! aligned values. It decides which row supplies column names, where data
//! starts, where a footer cuts the data off, and how to trim trailing
//! blank rows — the data-shaping layer between a spreadsheet reader and
//! whatever consumes tabular data.
//!
//! Parsing spreadsheet files is out of scope: any reader that can
//! materialize cells into a [`Worksheet`] can feed this crate.
//!
//! # Example
//!
//! ```
//! use sheetable::{extract_table, CellValue, Worksheet};
//!
//! let mut sheet = Worksheet::new("Marvel");
//! sheet.append_row(vec!["First Name".into(), "Last Name".into()]);
//! sheet.append_row(vec!["Peter".into(), "Parker".into()]);
//! sheet.append_row(vec!["Tony".into(), "Stark".into()]);
//!
//! // Row 1 is the header; data starts at row 2
//! let table = extract_table(&sheet, 1)?;
//! assert_eq!(table.column_names(), vec!["First Name", "Last Name"]);
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.value(0, 1), Some(&CellValue::String("Parker".into())));
//! # Ok::<(), sheetable::SheetError>(())
//! ```

pub mod error;
pub mod extract;
pub mod table;
pub mod types;
pub mod workbook;
pub mod worksheet;

pub use error::{Result, SheetError};
pub use extract::{
    extract_named_table, extract_table, extract_table_first_row_header, extract_table_with,
    extract_workbook_tables, extract_workbook_tables_first_row_header, is_last_row_empty,
    trim_trailing_empty_rows, ExtractOptions, FooterPredicate,
};
pub use table::{Column, Table};
pub use types::{Cell, CellValue};
pub use workbook::Workbook;
pub use worksheet::{Dimension, Worksheet};
