//! `tabkit_io_xlsx` v1:
//! Typed workbook model and XLSX writer kernel.
//!
//! Modules:
//! - `conf`   : Excel limits and default format presets
//! - `spec`   : cell/column/format/option/report models
//! - `sheet`  : typed workbook/sheet document model (`sheet_schema!`)
//! - `util`   : pure helper functions
//! - `writer` : workbook writer on top of `rust_xlsxwriter`
//! - `error`  : writer error types
pub mod conf;
pub mod error;
pub mod sheet;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
    derive_default_body_format, derive_default_header_format,
};
pub use error::{XlsxIoError, XlsxIoResult};
pub use sheet::{CellType, Sheet, SheetGrid, SheetRow, SheetSchema, Workbook, sheet, workbook};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellAlign, EnumCellValue, EnumColumnKind, SpecAutofitCellsPolicy,
    SpecCellFormat, SpecColumn, SpecSheetReport, SpecXlsxReport, SpecXlsxWriteOptions,
};
pub use util::{derive_unique_sheet_name, sanitize_sheet_name};
pub use writer::{XlsxWriter, write_workbook_to_buffer, write_workbook_to_path};
