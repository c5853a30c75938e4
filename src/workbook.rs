//! Ordered collection of named worksheets

use crate::worksheet::Worksheet;
use indexmap::IndexMap;

/// A workbook: worksheets in a stable order, addressable by name or index
///
/// # Example
///
/// ```
/// use sheetable::{Workbook, Worksheet};
///
/// let mut book = Workbook::new();
/// book.add_sheet(Worksheet::new("Summary"));
/// book.add_sheet(Worksheet::new("Detail"));
///
/// assert_eq!(book.sheet_names(), vec!["Summary", "Detail"]);
/// assert!(book.sheet("Detail").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: IndexMap<String, Worksheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Workbook {
            sheets: IndexMap::new(),
        }
    }

    /// Add a worksheet, keyed by its name
    ///
    /// Adding a sheet whose name already exists replaces the previous sheet
    /// in place, keeping its position.
    pub fn add_sheet(&mut self, sheet: Worksheet) {
        self.sheets.insert(sheet.name().to_string(), sheet);
    }

    /// Look up a worksheet by name
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.get(name)
    }

    /// Mutable lookup by name
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.sheets.get_mut(name)
    }

    /// Worksheet at the given position (0-based insertion order)
    pub fn sheet_at(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get_index(index).map(|(_, sheet)| sheet)
    }

    /// Iterate worksheets in insertion order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.sheets.values()
    }

    /// Sheet names in insertion order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Number of worksheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
