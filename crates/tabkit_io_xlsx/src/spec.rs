//! Shared XLSX specification models.

use crate::conf::{derive_default_body_format, derive_default_header_format};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueSpecification

/// Normalized cell value handed from the document model to the writer.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Absent value; written as an empty cell.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl EnumCellValue {
    /// Whether the value is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Value kind of a column, fixed by the Rust type declared for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumColumnKind {
    /// String column.
    Text,
    /// Whole-number column.
    Integer,
    /// Fractional-number column.
    Decimal,
}

/// One column of a sheet schema, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumn {
    /// Field name of the row struct.
    pub key: String,
    /// Header label written in the first row.
    pub header: String,
    /// Value kind derived from the field type.
    pub kind: EnumColumnKind,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCellAlign {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Cell format applied to a header or to the body cells of one column kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<EnumCellAlign>,
    /// Thin border on all sides.
    pub if_border: Option<bool>,
    /// Number format code.
    pub num_format: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format with every `Some` field of `patch` overriding `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: patch.font_name.or_else(|| self.font_name.clone()),
            font_size: patch.font_size.or(self.font_size),
            bold: patch.bold.or(self.bold),
            align: patch.align.or(self.align),
            if_border: patch.if_border.or(self.if_border),
            num_format: patch.num_format.or_else(|| self.num_format.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Autofit rule for column width inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Disable autofit.
    None,
    /// Infer width from header cells only (default).
    #[default]
    Header,
    /// Infer width from body cells only.
    Body,
    /// Infer width from both header and body cells.
    All,
}

/// Autofit policy applied to every sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Autofit width inference rule.
    pub rule_columns: EnumAutofitColumnsRule,
    /// Max body rows inspected when body-based inference is active.
    pub height_body_inferred_max: Option<usize>,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::Header,
            height_body_inferred_max: Some(20_000),
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

/// Writer-wide options controlling formatting defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Body format of text columns.
    pub fmt_text: SpecCellFormat,
    /// Body format of integer columns.
    pub fmt_integer: SpecCellFormat,
    /// Body format of decimal columns.
    pub fmt_decimal: SpecCellFormat,
    /// Header row format.
    pub fmt_header: SpecCellFormat,
    /// Freeze the header row.
    pub if_freeze_header: bool,
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
}

impl SpecXlsxWriteOptions {
    /// Body format for columns of `kind`.
    pub fn fmt_for(&self, kind: EnumColumnKind) -> &SpecCellFormat {
        match kind {
            EnumColumnKind::Text => &self.fmt_text,
            EnumColumnKind::Integer => &self.fmt_integer,
            EnumColumnKind::Decimal => &self.fmt_decimal,
        }
    }
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            fmt_text: derive_default_body_format(EnumColumnKind::Text),
            fmt_integer: derive_default_body_format(EnumColumnKind::Integer),
            fmt_decimal: derive_default_body_format(EnumColumnKind::Decimal),
            fmt_header: derive_default_header_format(),
            if_freeze_header: true,
            policy_autofit: SpecAutofitCellsPolicy::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// One physical worksheet emitted to the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetReport {
    /// Name requested by the logical sheet.
    pub sheet_name_requested: String,
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    /// Number of body rows written (header excluded).
    pub n_rows: usize,
    /// Number of columns written.
    pub n_cols: usize,
}

/// Per-workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Worksheets in write order.
    pub sheets: Vec<SpecSheetReport>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
