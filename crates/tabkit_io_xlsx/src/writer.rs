//! XLSX writer kernel that turns a [`Workbook`] into workbook output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Worksheet};
use tracing::{debug, info, warn};

use crate::error::{XlsxIoError, XlsxIoResult};
use crate::sheet::{SheetGrid, Workbook};
use crate::spec::{
    EnumAutofitColumnsRule, EnumCellAlign, EnumCellValue, SpecCellFormat, SpecSheetReport,
    SpecXlsxReport, SpecXlsxWriteOptions,
};
use crate::util::{
    calculate_column_width, cast_col_num, cast_row_num, derive_unique_sheet_name,
    estimate_unicode_string_width, estimate_width_len, sanitize_sheet_name,
    validate_policy_autofit, validate_row_widths, validate_sheet_size,
};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: rust_xlsxwriter::Workbook,
    write_options: SpecXlsxWriteOptions,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and write options.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: impl Into<PathBuf>, write_options: SpecXlsxWriteOptions) -> Self {
        Self {
            path_file_out: path_file_out.into(),
            workbook: rust_xlsxwriter::Workbook::new(),
            write_options,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecXlsxReport::default(),
            if_closed: false,
        }
    }

    /// Output file path.
    pub fn file_out(&self) -> &Path {
        &self.path_file_out
    }

    /// Snapshot of the write report so far.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> XlsxIoResult<()> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        info!(
            path = %self.path_file_out.display(),
            n_sheets = self.report.sheets.len(),
            "workbook saved"
        );
        Ok(())
    }

    /// Serialize the workbook into memory instead of the bound path.
    ///
    /// Closes the writer.
    pub fn save_to_buffer(&mut self) -> XlsxIoResult<Vec<u8>> {
        if self.if_closed {
            return Err(XlsxIoError::WriterClosed);
        }
        let v_bytes = self.workbook.save_to_buffer()?;
        self.if_closed = true;
        debug!(n_bytes = v_bytes.len(), "workbook serialized to buffer");
        Ok(v_bytes)
    }

    /// Write every sheet of `workbook` in tab order.
    pub fn write_workbook(&mut self, workbook: &Workbook) -> XlsxIoResult<()> {
        debug!(
            workbook = %workbook.name,
            n_sheets = workbook.sheets.len(),
            "writing workbook"
        );
        for sheet in &workbook.sheets {
            self.write_sheet(sheet)?;
        }
        Ok(())
    }

    /// Write one sheet: header row from the columns, then one row per logical row.
    ///
    /// Nothing is added to the workbook unless the whole sheet is written.
    pub fn write_sheet(&mut self, sheet: &SheetGrid) -> XlsxIoResult<()> {
        if self.if_closed {
            return Err(XlsxIoError::WriterClosed);
        }
        validate_policy_autofit(&self.write_options.policy_autofit)?;

        let n_cols = sheet.columns.len();
        let n_rows = sheet.rows.len();
        validate_sheet_size(&sheet.name, n_rows, n_cols)?;
        validate_row_widths(&sheet.name, &sheet.rows, n_cols)?;

        let sheet_name_sanitized = sanitize_sheet_name(&sheet.name, "_");
        let mut set_sheet_names_next = self.set_sheet_names_existing.clone();
        let sheet_name_unique =
            derive_unique_sheet_name(&sheet_name_sanitized, &mut set_sheet_names_next);

        let mut worksheet = Worksheet::new();
        worksheet.set_name(&sheet_name_unique)?;

        let write_options = &self.write_options;
        let fmt_header = derive_rust_xlsx_format(&write_options.fmt_header);
        let l_fmt_data_by_col: Vec<Format> = sheet
            .columns
            .iter()
            .map(|col| derive_rust_xlsx_format(write_options.fmt_for(col.kind)))
            .collect();

        for (n_idx_col, col) in sheet.columns.iter().enumerate() {
            worksheet.write_string_with_format(
                0,
                cast_col_num(n_idx_col)?,
                &col.header,
                &fmt_header,
            )?;
        }

        for (n_idx_row, row) in sheet.rows.iter().enumerate() {
            for (n_idx_col, value) in row.iter().enumerate() {
                write_cell_with_format(
                    &mut worksheet,
                    n_idx_row + 1,
                    n_idx_col,
                    value,
                    &l_fmt_data_by_col[n_idx_col],
                )?;
            }
        }

        if write_options.if_freeze_header {
            worksheet.set_freeze_panes(1, 0)?;
        }

        apply_autofit_columns(&mut worksheet, sheet, write_options)?;

        self.workbook.push_worksheet(worksheet);
        self.set_sheet_names_existing = set_sheet_names_next;

        if sheet_name_unique != sheet.name {
            warn!(
                requested = %sheet.name,
                actual = %sheet_name_unique,
                "sheet renamed"
            );
            self.report.warn(format!(
                "Sheet {:?} written as {:?}.",
                sheet.name, sheet_name_unique
            ));
        }
        debug!(
            sheet = %sheet_name_unique,
            n_rows,
            n_cols,
            "sheet written"
        );
        self.report.sheets.push(SpecSheetReport {
            sheet_name_requested: sheet.name.clone(),
            sheet_name: sheet_name_unique,
            n_rows,
            n_cols,
        });
        Ok(())
    }
}

/// Write `workbook` to `path_file_out` and return the write report.
pub fn write_workbook_to_path(
    workbook: &Workbook,
    path_file_out: impl Into<PathBuf>,
    write_options: SpecXlsxWriteOptions,
) -> XlsxIoResult<SpecXlsxReport> {
    let mut writer = XlsxWriter::new(path_file_out, write_options);
    writer.write_workbook(workbook)?;
    writer.close()?;
    Ok(writer.report())
}

/// Serialize `workbook` into xlsx bytes.
pub fn write_workbook_to_buffer(
    workbook: &Workbook,
    write_options: SpecXlsxWriteOptions,
) -> XlsxIoResult<Vec<u8>> {
    let mut writer = XlsxWriter::new(workbook.name.as_str(), write_options);
    writer.write_workbook(workbook)?;
    writer.save_to_buffer()
}

fn apply_autofit_columns(
    worksheet: &mut Worksheet,
    sheet: &SheetGrid,
    write_options: &SpecXlsxWriteOptions,
) -> XlsxIoResult<()> {
    let policy = &write_options.policy_autofit;
    if matches!(policy.rule_columns, EnumAutofitColumnsRule::None) {
        return Ok(());
    }

    let n_rows_inspected = policy
        .height_body_inferred_max
        .map_or(sheet.rows.len(), |n_max| usize::min(n_max, sheet.rows.len()));

    for (n_idx_col, col) in sheet.columns.iter().enumerate() {
        let n_width_header = estimate_unicode_string_width(&col.header);
        let n_width_body = sheet.rows[..n_rows_inspected]
            .iter()
            .filter_map(|row| row.get(n_idx_col))
            .map(|value| estimate_width_len(value, col.kind))
            .max()
            .unwrap_or(0);

        let n_width_recorded = match policy.rule_columns {
            EnumAutofitColumnsRule::Header | EnumAutofitColumnsRule::None => n_width_header,
            EnumAutofitColumnsRule::Body => n_width_body,
            EnumAutofitColumnsRule::All => usize::max(n_width_header, n_width_body),
        };
        worksheet.set_column_width(
            cast_col_num(n_idx_col)?,
            calculate_column_width(n_width_recorded, policy) as f64,
        )?;
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> XlsxIoResult<()> {
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(
                cast_row_num(row_idx)?,
                cast_col_num(col_idx)?,
                val,
                format,
            )?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(
                cast_row_num(row_idx)?,
                cast_col_num(col_idx)?,
                *val,
                format,
            )?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.as_str());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(align) = spec.align {
        format = format.set_align(derive_format_align(align));
    }
    if spec.if_border.unwrap_or(false) {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.as_str());
    }

    format
}

fn derive_format_align(align: EnumCellAlign) -> FormatAlign {
    match align {
        EnumCellAlign::Left => FormatAlign::Left,
        EnumCellAlign::Center => FormatAlign::Center,
        EnumCellAlign::Right => FormatAlign::Right,
    }
}
