//! XLSX writer error types.

use thiserror::Error;

/// Result type for XLSX write operations.
pub type XlsxIoResult<T> = std::result::Result<T, XlsxIoError>;

/// Errors raised while turning a workbook into an xlsx file.
#[derive(Debug, Error)]
pub enum XlsxIoError {
    /// Underlying engine or sink failure (path invalid, permission denied, disk full).
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Write attempted after the workbook was flushed.
    #[error("Cannot write after close().")]
    WriterClosed,

    /// Invalid writer option.
    #[error("invalid write option: {0}")]
    InvalidOption(String),

    /// Sheet exceeds Excel row/column limits.
    #[error("sheet {sheet_name:?} exceeds Excel limits: {n_rows} rows x {n_cols} columns")]
    SheetTooLarge {
        /// Logical sheet name.
        sheet_name: String,
        /// Row count including header.
        n_rows: usize,
        /// Column count.
        n_cols: usize,
    },

    /// Row cell count differs from the sheet's column count.
    #[error("sheet {sheet_name:?} row {n_idx_row} has {n_cells} cells, expected {n_cols}")]
    RowWidthMismatch {
        /// Logical sheet name.
        sheet_name: String,
        /// Zero-based body row index.
        n_idx_row: usize,
        /// Cells in the row.
        n_cells: usize,
        /// Columns declared for the sheet.
        n_cols: usize,
    },

    /// Row index does not fit the engine's row type.
    #[error("row index overflow: {0}")]
    RowIndexOverflow(usize),

    /// Column index does not fit the engine's column type.
    #[error("column index overflow: {0}")]
    ColumnIndexOverflow(usize),
}
