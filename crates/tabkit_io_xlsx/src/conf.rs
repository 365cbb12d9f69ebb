//! XLSX constants and default format presets.

use crate::spec::{EnumCellAlign, EnumColumnKind, SpecCellFormat};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Font of every preset.
pub const C_FONT_NAME_DEFAULT: &str = "Calibri";
/// Font size of every preset.
pub const N_FONT_SIZE_DEFAULT: i64 = 11;
/// Number format of integer columns.
pub const C_NUM_FORMAT_INTEGER: &str = "0";
/// Number format of decimal columns.
pub const C_NUM_FORMAT_DECIMAL: &str = "0.0000";

fn derive_base_format() -> SpecCellFormat {
    SpecCellFormat {
        font_name: Some(C_FONT_NAME_DEFAULT.to_string()),
        font_size: Some(N_FONT_SIZE_DEFAULT),
        align: Some(EnumCellAlign::Left),
        ..Default::default()
    }
}

/// Body cell preset for a column kind; numbers are right-aligned with a fixed format.
pub fn derive_default_body_format(kind: EnumColumnKind) -> SpecCellFormat {
    let c_num_format = match kind {
        EnumColumnKind::Text => return derive_base_format(),
        EnumColumnKind::Integer => C_NUM_FORMAT_INTEGER,
        EnumColumnKind::Decimal => C_NUM_FORMAT_DECIMAL,
    };
    derive_base_format().with_(SpecCellFormat {
        align: Some(EnumCellAlign::Right),
        num_format: Some(c_num_format.to_string()),
        ..Default::default()
    })
}

/// Header row preset: bold, centered, thin border.
pub fn derive_default_header_format() -> SpecCellFormat {
    derive_base_format().with_(SpecCellFormat {
        bold: Some(true),
        align: Some(EnumCellAlign::Center),
        if_border: Some(true),
        ..Default::default()
    })
}
