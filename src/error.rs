//! Error types for worksheet-to-table extraction

use thiserror::Error;

/// Errors produced by this crate
#[derive(Error, Debug)]
pub enum SheetError {
    /// An argument failed validation before any work began
    #[error("{param} must be 0 or greater, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter
        param: &'static str,
        /// The supplied value
        value: i64,
    },

    /// A worksheet was requested by name but does not exist in the workbook
    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),
}

/// Result type alias for sheetable operations
pub type Result<T> = std::result::Result<T, SheetError>;
