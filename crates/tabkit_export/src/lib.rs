//! `tabkit_export` v1:
//! Spreadsheet-backed export of product collections.
//!
//! Modules:
//! - `product` : product workbook assembly + spreadsheet export repository
//! - `error`   : export error types
pub mod error;
pub mod product;

pub use error::{ExportError, ExportResult};
pub use product::{
    C_SHEET_ACTIVE, C_SHEET_INACTIVE, C_SHEET_SUMMARY, ProductColumns,
    ProductExportSpreadsheetRepository, ProductRow, SummaryColumns, SummaryRow,
    build_product_workbook, derive_cell_number,
};
