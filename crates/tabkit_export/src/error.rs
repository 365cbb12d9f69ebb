//! Export error types.

use tabkit_io_xlsx::XlsxIoError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors raised while exporting a product collection.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook could not be written to its destination.
    #[error("export write failed: {0}")]
    Write(#[from] XlsxIoError),

    /// Export name is not a plain file name (empty, absolute, or has directory parts).
    #[error("invalid export name {0:?}: expected a plain file name")]
    InvalidName(String),
}
