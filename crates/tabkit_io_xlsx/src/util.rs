//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::BTreeSet;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::error::{XlsxIoError, XlsxIoResult};
use crate::spec::{EnumCellValue, EnumColumnKind, SpecAutofitCellsPolicy};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars, truncate to 31 chars, then trim to a valid Excel sheet name.
///
/// Trimming runs after truncation so a cut never leaves a leading or trailing apostrophe.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    let c_truncated: String = c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect();
    match trim_sheet_name_edges(&c_truncated) {
        "" => "Sheet".to_string(),
        c_trimmed => c_trimmed.to_string(),
    }
}

fn trim_sheet_name_edges(name: &str) -> &str {
    name.trim_matches(|chr: char| chr == '\'' || chr.is_whitespace())
}

/// Return `name` or a `__N`-suffixed variant not yet in `set_names_existing`.
///
/// Excel compares sheet names case-insensitively, so the set holds lowercase names.
/// The returned name is registered in the set.
pub fn derive_unique_sheet_name(name: &str, set_names_existing: &mut BTreeSet<String>) -> String {
    if set_names_existing.insert(name.to_lowercase()) {
        return name.to_string();
    }

    let mut n_idx = 2usize;
    loop {
        let c_suffix = format!("__{n_idx}");
        let n_len_base = N_LEN_EXCEL_SHEET_NAME_MAX.saturating_sub(c_suffix.len());
        let c_base: String = name.chars().take(n_len_base).collect();
        let candidate = format!("{c_base}{c_suffix}");
        if set_names_existing.insert(candidate.to_lowercase()) {
            return candidate;
        }
        n_idx += 1;
    }
}

/// Reject sheets that cannot fit in one Excel worksheet.
pub fn validate_sheet_size(sheet_name: &str, n_rows_body: usize, n_cols: usize) -> XlsxIoResult<()> {
    let n_rows = n_rows_body + 1;
    if n_rows > N_NROWS_EXCEL_MAX || n_cols > N_NCOLS_EXCEL_MAX {
        return Err(XlsxIoError::SheetTooLarge {
            sheet_name: sheet_name.to_string(),
            n_rows,
            n_cols,
        });
    }
    Ok(())
}

/// Reject rows whose cell count differs from the column count.
pub fn validate_row_widths(
    sheet_name: &str,
    rows: &[Vec<EnumCellValue>],
    n_cols: usize,
) -> XlsxIoResult<()> {
    match rows.iter().position(|row| row.len() != n_cols) {
        Some(n_idx_row) => Err(XlsxIoError::RowWidthMismatch {
            sheet_name: sheet_name.to_string(),
            n_idx_row,
            n_cells: rows[n_idx_row].len(),
            n_cols,
        }),
        None => Ok(()),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Validate autofit bounds.
pub fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> XlsxIoResult<()> {
    if policy_autofit.width_cell_min == 0 {
        return Err(XlsxIoError::InvalidOption(
            "policy_autofit.width_cell_min must be >= 1.".to_string(),
        ));
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(XlsxIoError::InvalidOption(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        ));
    }
    Ok(())
}

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue, kind: EnumColumnKind) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => estimate_unicode_string_width(s),
        EnumCellValue::Number(n) => match kind {
            EnumColumnKind::Integer => format!("{n:.0}").len(),
            EnumColumnKind::Decimal => format!("{n:.4}").len(),
            EnumColumnKind::Text => n.to_string().len(),
        },
    }
}

/// Width estimate where non-ASCII characters count as 1.6 units.
pub fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Clamp recorded width plus padding into policy bounds (Excel caps at 255).
pub fn calculate_column_width(n_width_recorded: usize, policy: &SpecAutofitCellsPolicy) -> usize {
    let n_min = usize::max(1, policy.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy.width_cell_max));
    usize::min(
        n_max,
        usize::max(n_min, n_width_recorded + policy.width_cell_padding),
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasting

/// Convert a row index into the engine's row type.
pub fn cast_row_num(value: usize) -> XlsxIoResult<u32> {
    u32::try_from(value).map_err(|_| XlsxIoError::RowIndexOverflow(value))
}

/// Convert a column index into the engine's column type.
pub fn cast_col_num(value: usize) -> XlsxIoResult<u16> {
    u16::try_from(value).map_err(|_| XlsxIoError::ColumnIndexOverflow(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
