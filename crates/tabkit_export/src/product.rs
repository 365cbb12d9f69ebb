//! Product export to a spreadsheet workbook.
//!
//! One workbook per export: "Active Products", "Inactive Products" and a one-row "Summary".

use std::path::{Component, Path, PathBuf};

use tabkit_entity::{Collection, Product, ProductExportRepository, collection};
use tabkit_io_xlsx::{
    SpecXlsxWriteOptions, Workbook, XlsxWriter, sheet, sheet_schema, workbook,
    write_workbook_to_buffer,
};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};

/// Sheet holding products with status `"active"`.
pub const C_SHEET_ACTIVE: &str = "Active Products";
/// Sheet holding every other product.
pub const C_SHEET_INACTIVE: &str = "Inactive Products";
/// One-row totals sheet.
pub const C_SHEET_SUMMARY: &str = "Summary";

const C_EXT_XLSX: &str = "xlsx";

sheet_schema! {
    /// Columns of the per-status product sheets.
    pub struct ProductColumns => ProductRow {
        id: String => "ID",
        title: String => "Title",
        quantity: i64 => "Quantity",
        status: String => "Status",
    }
}

sheet_schema! {
    /// Columns of the summary sheet.
    pub struct SummaryColumns => SummaryRow {
        products_count: i64 => "# Products",
        items_count: i64 => "# Items total",
        items_active_count: i64 => "# Items active",
        items_inactive_count: i64 => "# Items inactive",
    }
}

/// Summary cell value: zero is rendered as an empty cell.
pub fn derive_cell_number(value: i64) -> Option<i64> {
    (value != 0).then_some(value)
}

fn derive_product_rows(products: Collection<&Product>) -> Vec<ProductRow> {
    products
        .uniq_with(|a, b| a.equals(b))
        .sort_by_key(|p| p.title().clone())
        .map(|p| ProductRow {
            id: Some(p.id().clone()),
            title: Some(p.title().clone()),
            quantity: Some(*p.quantity().value()),
            status: Some(p.status().clone()),
        })
        .value()
}

fn sum_quantity(products: Collection<&Product>) -> i64 {
    products.sum_by(|p| *p.quantity().value())
}

/// Assemble the export workbook for `products`.
///
/// Item totals are raw quantity sums; `# Products` counts distinct products.
pub fn build_product_workbook(name: &str, products: &[Product]) -> Workbook {
    let (products_active, products_inactive) = collection(products).partition(|p| p.is_active());

    let summary = SummaryRow {
        products_count: derive_cell_number(
            collection(products).uniq_with(|a, b| a.equals(b)).len() as i64,
        ),
        items_count: derive_cell_number(sum_quantity(collection(products))),
        items_active_count: derive_cell_number(sum_quantity(products_active.clone())),
        items_inactive_count: derive_cell_number(sum_quantity(products_inactive.clone())),
    };

    let l_rows_active = derive_product_rows(products_active);
    let l_rows_inactive = derive_product_rows(products_inactive);
    debug!(
        workbook = name,
        n_products = products.len(),
        n_rows_active = l_rows_active.len(),
        n_rows_inactive = l_rows_inactive.len(),
        "product workbook built"
    );

    workbook(
        name,
        vec![
            sheet(C_SHEET_ACTIVE, l_rows_active).into(),
            sheet(C_SHEET_INACTIVE, l_rows_inactive).into(),
            sheet(C_SHEET_SUMMARY, vec![summary]).into(),
        ],
    )
}

/// Writes product exports as `.xlsx` files into one directory.
#[derive(Debug, Clone)]
pub struct ProductExportSpreadsheetRepository {
    dir_out: PathBuf,
    write_options: SpecXlsxWriteOptions,
}

impl ProductExportSpreadsheetRepository {
    /// Repository writing into `dir_out` with default write options.
    ///
    /// The directory must exist when [`export`](ProductExportRepository::export) runs.
    pub fn new(dir_out: impl Into<PathBuf>) -> Self {
        Self {
            dir_out: dir_out.into(),
            write_options: SpecXlsxWriteOptions::default(),
        }
    }

    /// Replace the write options.
    pub fn with_write_options(mut self, write_options: SpecXlsxWriteOptions) -> Self {
        self.write_options = write_options;
        self
    }

    /// Output directory.
    pub fn dir_out(&self) -> &Path {
        &self.dir_out
    }

    /// File path for an export named `name`; `.xlsx` is appended when missing.
    ///
    /// `name` must be a single plain file name, so the file always lands inside
    /// [`dir_out`](Self::dir_out).
    pub fn path_file_out(&self, name: &str) -> ExportResult<PathBuf> {
        let mut components = Path::new(name).components();
        let c_file_name = match (components.next(), components.next()) {
            (Some(Component::Normal(c_file_name)), None) => c_file_name.to_string_lossy(),
            _ => return Err(ExportError::InvalidName(name.to_string())),
        };
        let if_has_ext = Path::new(c_file_name.as_ref())
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(C_EXT_XLSX));
        if if_has_ext {
            Ok(self.dir_out.join(c_file_name.as_ref()))
        } else {
            Ok(self.dir_out.join(format!("{c_file_name}.{C_EXT_XLSX}")))
        }
    }

    /// Export into memory instead of the output directory.
    pub fn export_to_buffer(&self, name: &str, products: &[Product]) -> ExportResult<Vec<u8>> {
        let book = build_product_workbook(name, products);
        let v_bytes = write_workbook_to_buffer(&book, self.write_options.clone())?;
        Ok(v_bytes)
    }
}

impl ProductExportRepository for ProductExportSpreadsheetRepository {
    type Error = ExportError;

    fn export(&self, name: &str, products: &[Product]) -> Result<(), Self::Error> {
        let path_file_out = self.path_file_out(name)?;
        let book = build_product_workbook(name, products);

        let mut writer = XlsxWriter::new(path_file_out.clone(), self.write_options.clone());
        writer.write_workbook(&book)?;
        writer.close()?;

        let report = writer.report();
        info!(
            path = %path_file_out.display(),
            n_products = products.len(),
            n_sheets = report.sheets.len(),
            n_warnings = report.warnings.len(),
            "products exported"
        );
        Ok(())
    }
}
