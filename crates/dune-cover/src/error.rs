//! Cover pipeline error types.
//!
//! The pipeline itself cannot fail; these errors come from exporting results.

#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Exported bytes were not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
