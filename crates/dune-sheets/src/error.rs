//! Workbook ingestion error types.

/// Errors raised while opening or validating a survey workbook.
///
/// All of these are fatal: they are reported before any computation runs.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// A required sheet is absent from the workbook.
    #[error("Missing sheet '{sheet}' (found: {})", available.join(", "))]
    MissingSheet {
        sheet: String,
        available: Vec<String>,
    },

    /// A required column is absent from a sheet's header row.
    #[error("Sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },

    /// The input path has an extension we cannot read.
    #[error("Unsupported workbook format: {0}")]
    UnsupportedFormat(String),

    /// Spreadsheet parsing failed.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (directory listing, file access).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
