//! Worksheet-to-table extraction
//!
//! The core routine walks a worksheet's populated rectangle once, top to
//! bottom: one row supplies column names (or names are synthesized), the
//! rows after it become table rows, and an optional footer predicate cuts
//! the scan short. [`trim_trailing_empty_rows`] is the one mutating
//! operation, shrinking a worksheet's bounds in place before extraction.

use crate::error::{Result, SheetError};
use crate::table::{Column, Table};
use crate::types::CellValue;
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

/// Per-cell footer test: the first data row in which any cell satisfies
/// the predicate ends the scan, excluding that row and everything after it
pub type FooterPredicate = Box<dyn Fn(&CellValue) -> bool>;

/// Optional knobs for [`extract_table_with`]
///
/// # Example
///
/// ```
/// use sheetable::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .with_start_column(2)
///     .with_column_names(["id", "amount"])
///     .with_footer_predicate(|cell| cell.as_string() == "TOTAL");
/// ```
pub struct ExtractOptions {
    footer_predicate: Option<FooterPredicate>,
    start_column: u32,
    end_column: Option<u32>,
    column_names: Option<Vec<String>>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            footer_predicate: None,
            start_column: 1,
            end_column: None,
            column_names: None,
        }
    }
}

impl ExtractOptions {
    /// Options with defaults: column 1 through the sheet's last populated
    /// column, no footer detection, names from the header row
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop scanning at the first row in which any cell satisfies the
    /// predicate; that row and all rows after it are excluded
    pub fn with_footer_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CellValue) -> bool + 'static,
    {
        self.footer_predicate = Some(Box::new(predicate));
        self
    }

    /// First grid column to extract (1-based, default 1)
    pub fn with_start_column(mut self, column: u32) -> Self {
        self.start_column = column;
        self
    }

    /// Last grid column to extract (1-based, inclusive)
    ///
    /// Defaults to the worksheet's last populated column.
    pub fn with_end_column(mut self, column: u32) -> Self {
        self.end_column = Some(column);
        self
    }

    /// Explicit column names, replacing header-derived or synthesized names
    ///
    /// The length is not checked against the grid width: fewer names narrow
    /// the table to the named prefix, extra names produce columns whose
    /// cells read as [`CellValue::Empty`].
    pub fn with_column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Extract a table from a worksheet
///
/// `header_row` is 1-based: `0` means the sheet has no header row and
/// column names are synthesized as `"Column {n}"`; any `n > 0` means row
/// `n` supplies the column names and data begins at row `n + 1`, ignoring
/// every row before `n` entirely. Fails with
/// [`SheetError::InvalidArgument`] if `header_row` is negative.
///
/// # Example
///
/// ```
/// use sheetable::{extract_table, Worksheet};
///
/// let mut sheet = Worksheet::new("People");
/// sheet.append_row(vec!["Name".into(), "City".into()]);
/// sheet.append_row(vec!["Alice".into(), "NYC".into()]);
/// sheet.append_row(vec!["Bob".into(), "SF".into()]);
///
/// let table = extract_table(&sheet, 1)?;
/// assert_eq!(table.column_names(), vec!["Name", "City"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.value(1, 0).unwrap().as_string(), "Bob");
/// # Ok::<(), sheetable::SheetError>(())
/// ```
pub fn extract_table(sheet: &Worksheet, header_row: i32) -> Result<Table> {
    extract_table_with(sheet, header_row, &ExtractOptions::default())
}

/// Extract a table from a worksheet with explicit options
///
/// Same contract as [`extract_table`], plus the footer predicate, column
/// range, and column name override carried by [`ExtractOptions`].
pub fn extract_table_with(
    sheet: &Worksheet,
    header_row: i32,
    options: &ExtractOptions,
) -> Result<Table> {
    validate_header_row(header_row)?;

    let Some(dimension) = sheet.dimension() else {
        // Nothing populated: the fixed point is an empty table
        return Ok(Table::new(sheet.name(), Vec::new()));
    };

    let start_col = options.start_column;
    let end_col = options.end_column.unwrap_or(dimension.end_col);
    let sheet_start_row = if header_row > 0 { header_row as u32 } else { 1 };

    let columns: Vec<Column> = match &options.column_names {
        Some(names) => names.iter().map(Column::new).collect(),
        None => (start_col..=end_col)
            .map(|col| {
                if header_row > 0 {
                    Column::new(sheet.text(sheet_start_row, col))
                } else {
                    Column::new(format!("Column {col}"))
                }
            })
            .collect(),
    };
    let width = columns.len() as u32;

    let data_start_row = if header_row > 0 {
        sheet_start_row + 1
    } else {
        sheet_start_row
    };

    let mut table = Table::new(sheet.name(), columns);
    'rows: for row in data_start_row..=dimension.end_row {
        if let Some(predicate) = &options.footer_predicate {
            for col in start_col..start_col + width {
                if predicate(sheet.value(row, col)) {
                    break 'rows;
                }
            }
        }
        let cells = (start_col..start_col + width)
            .map(|col| sheet.value(row, col).clone())
            .collect();
        table.push_row(cells);
    }

    Ok(table)
}

/// Extract a table treating the first row as a header when the flag is set
///
/// `true` maps to `header_row = 1`, `false` to `header_row = 0`.
pub fn extract_table_first_row_header(
    sheet: &Worksheet,
    first_row_contains_header: bool,
) -> Result<Table> {
    extract_table(sheet, if first_row_contains_header { 1 } else { 0 })
}

/// Extract one table per worksheet, preserving workbook order
///
/// `header_row` follows the [`extract_table`] contract and is validated
/// once, before any worksheet is visited.
pub fn extract_workbook_tables(workbook: &Workbook, header_row: i32) -> Result<Vec<Table>> {
    validate_header_row(header_row)?;
    workbook
        .worksheets()
        .map(|sheet| extract_table(sheet, header_row))
        .collect()
}

/// Workbook-wide variant of [`extract_table_first_row_header`]
pub fn extract_workbook_tables_first_row_header(
    workbook: &Workbook,
    first_row_contains_header: bool,
) -> Result<Vec<Table>> {
    extract_workbook_tables(workbook, if first_row_contains_header { 1 } else { 0 })
}

/// Extract a table from the named worksheet of a workbook
///
/// Fails with [`SheetError::SheetNotFound`] if no worksheet has that name.
pub fn extract_named_table(
    workbook: &Workbook,
    sheet_name: &str,
    header_row: i32,
) -> Result<Table> {
    let sheet = workbook
        .sheet(sheet_name)
        .ok_or_else(|| SheetError::SheetNotFound(sheet_name.to_string()))?;
    extract_table(sheet, header_row)
}

/// Returns true iff every cell in the worksheet's last populated row is
/// blank (empty, or whitespace-only text)
///
/// A sheet with no populated cells returns false.
pub fn is_last_row_empty(sheet: &Worksheet) -> bool {
    let Some(dimension) = sheet.dimension() else {
        return false;
    };
    (dimension.start_col..=dimension.end_col)
        .all(|col| sheet.value(dimension.end_row, col).is_blank())
}

/// Delete trailing all-blank rows, shrinking the worksheet's bounds
///
/// Repeats until the last populated row is non-blank or the sheet is
/// empty. This mutates the worksheet in place; tables already extracted
/// from it are unaffected.
pub fn trim_trailing_empty_rows(sheet: &mut Worksheet) {
    while is_last_row_empty(sheet) {
        sheet.delete_rows(sheet.end_row(), 1);
    }
}

fn validate_header_row(header_row: i32) -> Result<()> {
    if header_row < 0 {
        return Err(SheetError::InvalidArgument {
            param: "header_row",
            value: header_row as i64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers_sheet() -> Worksheet {
        let mut sheet = Worksheet::new("Numbers");
        sheet.append_row(vec!["id".into(), "value".into()]);
        sheet.append_row(vec![CellValue::Int(1), CellValue::Float(1.5)]);
        sheet.append_row(vec![CellValue::Int(2), CellValue::Float(2.5)]);
        sheet
    }

    #[test]
    fn synthesized_names_without_header() {
        let table = extract_table(&numbers_sheet(), 0).unwrap();
        assert_eq!(table.column_names(), vec!["Column 1", "Column 2"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn header_row_names_and_data_offset() {
        let table = extract_table(&numbers_sheet(), 1).unwrap();
        assert_eq!(table.column_names(), vec!["id", "value"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, 0), Some(&CellValue::Int(1)));
    }

    #[test]
    fn header_row_past_first_skips_preamble() {
        let mut sheet = Worksheet::new("Preamble");
        sheet.append_row(vec!["report title".into()]);
        sheet.append_row(vec!["generated 2024".into()]);
        sheet.append_row(vec!["name".into(), "score".into()]);
        sheet.append_row(vec!["a".into(), CellValue::Int(10)]);

        let table = extract_table(&sheet, 3).unwrap();
        assert_eq!(table.column_names(), vec!["name", "score"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.value(0, 0).unwrap().as_string(), "a");
    }

    #[test]
    fn negative_header_row_is_rejected() {
        let err = extract_table(&numbers_sheet(), -1).unwrap_err();
        match err {
            SheetError::InvalidArgument { param, value } => {
                assert_eq!(param, "header_row");
                assert_eq!(value, -1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_sheet_yields_empty_table() {
        let sheet = Worksheet::new("Blank");
        let table = extract_table(&sheet, 1).unwrap();
        assert_eq!(table.name(), "Blank");
        assert!(table.columns().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn footer_predicate_stops_scan() {
        let mut sheet = Worksheet::new("Footered");
        sheet.append_row(vec!["item".into(), "qty".into()]);
        sheet.append_row(vec!["apples".into(), CellValue::Int(3)]);
        sheet.append_row(vec!["pears".into(), CellValue::Int(5)]);
        sheet.append_row(vec!["TOTAL".into(), CellValue::Int(8)]);
        sheet.append_row(vec!["printed by intern".into()]);

        let options =
            ExtractOptions::new().with_footer_predicate(|cell| cell.as_string() == "TOTAL");
        let table = extract_table_with(&sheet, 1, &options).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, 0).unwrap().as_string(), "pears");
    }

    #[test]
    fn column_name_override_is_verbatim() {
        let options = ExtractOptions::new().with_column_names(["key", "amount"]);
        let table = extract_table_with(&numbers_sheet(), 1, &options).unwrap();
        assert_eq!(table.column_names(), vec!["key", "amount"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn column_name_override_narrows_to_prefix() {
        let options = ExtractOptions::new().with_column_names(["only"]);
        let table = extract_table_with(&numbers_sheet(), 1, &options).unwrap();
        assert_eq!(table.column_names(), vec!["only"]);
        assert_eq!(table.row(0).unwrap().len(), 1);
        assert_eq!(table.value(0, 0), Some(&CellValue::Int(1)));
    }

    #[test]
    fn column_range_restricts_extraction() {
        let mut sheet = Worksheet::new("Wide");
        sheet.append_row(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        sheet.append_row(vec!["1".into(), "2".into(), "3".into(), "4".into()]);

        let options = ExtractOptions::new().with_start_column(2).with_end_column(3);
        let table = extract_table_with(&sheet, 1, &options).unwrap();
        assert_eq!(table.column_names(), vec!["b", "c"]);
        assert_eq!(table.row(0).unwrap().len(), 2);
        assert_eq!(table.value(0, 1).unwrap().as_string(), "3");
    }

    #[test]
    fn first_row_header_flag_maps_to_header_row() {
        let with_header = extract_table_first_row_header(&numbers_sheet(), true).unwrap();
        let without = extract_table_first_row_header(&numbers_sheet(), false).unwrap();
        assert_eq!(with_header.len(), 2);
        assert_eq!(without.len(), 3);
    }

    #[test]
    fn named_table_lookup() {
        let mut book = Workbook::new();
        book.add_sheet(numbers_sheet());

        let table = extract_named_table(&book, "Numbers", 1).unwrap();
        assert_eq!(table.name(), "Numbers");

        let err = extract_named_table(&book, "Missing", 1).unwrap_err();
        assert!(matches!(err, SheetError::SheetNotFound(name) if name == "Missing"));
    }

    #[test]
    fn last_row_empty_detection() {
        let mut sheet = Worksheet::new("Tail");
        sheet.append_row(vec!["x".into(), "y".into()]);
        assert!(!is_last_row_empty(&sheet));

        sheet.append_row(vec![CellValue::Empty, "  ".into()]);
        assert!(is_last_row_empty(&sheet));

        // One non-blank cell among blanks keeps the row
        sheet.append_row(vec![CellValue::Empty, "z".into()]);
        assert!(!is_last_row_empty(&sheet));

        assert!(!is_last_row_empty(&Worksheet::new("Void")));
    }

    #[test]
    fn trim_removes_all_trailing_blank_rows() {
        let mut sheet = Worksheet::new("Trim");
        sheet.append_row(vec!["data".into()]);
        sheet.append_row(vec![CellValue::Empty]);
        sheet.append_row(vec!["".into()]);

        trim_trailing_empty_rows(&mut sheet);
        assert_eq!(sheet.end_row(), 1);
        assert!(!is_last_row_empty(&sheet));

        // No trailing blanks: dimension unchanged
        trim_trailing_empty_rows(&mut sheet);
        assert_eq!(sheet.end_row(), 1);
    }

    #[test]
    fn trim_empties_an_all_blank_sheet() {
        let mut sheet = Worksheet::new("AllBlank");
        sheet.append_row(vec![CellValue::Empty, CellValue::Empty]);
        sheet.append_row(vec!["   ".into()]);

        trim_trailing_empty_rows(&mut sheet);
        assert!(sheet.is_empty());
    }
}
