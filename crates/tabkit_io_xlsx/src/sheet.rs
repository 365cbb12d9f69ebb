//! Typed workbook/sheet document model.
//!
//! A sheet schema is declared once with [`sheet_schema!`](crate::sheet_schema): each column
//! names a field, its Rust value type and its header label. The macro derives the row struct
//! from that declaration (every field `Option<Type>`), so columns and rows cannot drift apart.
//!
//! ```
//! use tabkit_io_xlsx::sheet::{sheet, workbook};
//! use tabkit_io_xlsx::sheet_schema;
//!
//! sheet_schema! {
//!     pub struct ItemColumns => ItemRow {
//!         id: String => "ID",
//!         quantity: i64 => "Quantity",
//!     }
//! }
//!
//! let items = sheet(
//!     "Items",
//!     vec![ItemRow { id: Some("1".to_string()), quantity: None }],
//! );
//! let book = workbook("items.xlsx", vec![items.into()]);
//! assert_eq!(book.sheets()[0].header_labels(), vec!["ID", "Quantity"]);
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::spec::{EnumCellValue, EnumColumnKind, SpecColumn};

////////////////////////////////////////////////////////////////////////////////
// #region CellTypes

/// Rust type usable as a column value type.
///
/// xlsx stores every number as an IEEE double: integers are exact up to 2^53 in magnitude and
/// rounded beyond that.
pub trait CellType {
    /// Column kind fixed by this type.
    const KIND: EnumColumnKind;

    /// Convert a present value into a cell value.
    fn to_cell(&self) -> EnumCellValue;
}

impl CellType for String {
    const KIND: EnumColumnKind = EnumColumnKind::Text;

    fn to_cell(&self) -> EnumCellValue {
        EnumCellValue::String(self.clone())
    }
}

macro_rules! impl_cell_type_number {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl CellType for $ty {
                const KIND: EnumColumnKind = $kind;

                fn to_cell(&self) -> EnumCellValue {
                    EnumCellValue::Number(*self as f64)
                }
            }
        )+
    };
}

impl_cell_type_number!(EnumColumnKind::Integer => i32, i64, u32, u64, usize);
impl_cell_type_number!(EnumColumnKind::Decimal => f32, f64);

/// Convert an optional field value; `None` stays absent.
pub fn derive_cell_value<T: CellType>(value: &Option<T>) -> EnumCellValue {
    match value {
        Some(val) => val.to_cell(),
        None => EnumCellValue::None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Schema

/// Column declaration of a sheet, bound to its generated row type.
pub trait SheetSchema: Sized {
    /// Row shape derived from the columns.
    type Row: Debug + Clone + PartialEq;

    /// Columns in declaration order.
    fn columns() -> Vec<SpecColumn>;

    /// Row values in column order.
    fn to_cells(row: &Self::Row) -> Vec<EnumCellValue>;
}

/// Row type generated for exactly one schema.
pub trait SheetRow: Sized {
    /// Schema this row was derived from.
    type Schema: SheetSchema<Row = Self>;
}

/// Declare a sheet schema and derive its row struct.
///
/// `struct Columns => Row { field: Type => "Header", ... }` emits the unit struct `Columns`
/// implementing [`SheetSchema`] and the struct `Row` with one `Option<Type>` field per column.
/// `Type` must implement [`CellType`].
#[macro_export]
macro_rules! sheet_schema {
    (
        $(#[$meta:meta])*
        $vis:vis struct $schema:ident => $row:ident {
            $( $field:ident : $ty:ty => $header:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $schema;

        #[doc = concat!("Row shape derived from [`", stringify!($schema), "`].")]
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $row {
            $( pub $field: ::core::option::Option<$ty>, )+
        }

        impl $crate::sheet::SheetSchema for $schema {
            type Row = $row;

            fn columns() -> ::std::vec::Vec<$crate::spec::SpecColumn> {
                ::std::vec![
                    $(
                        $crate::spec::SpecColumn {
                            key: ::std::string::ToString::to_string(stringify!($field)),
                            header: ::std::string::ToString::to_string(&$header),
                            kind: <$ty as $crate::sheet::CellType>::KIND,
                        },
                    )+
                ]
            }

            fn to_cells(row: &$row) -> ::std::vec::Vec<$crate::spec::EnumCellValue> {
                ::std::vec![ $( $crate::sheet::derive_cell_value(&row.$field), )+ ]
            }
        }

        impl $crate::sheet::SheetRow for $row {
            type Schema = $schema;
        }
    };
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Document

/// One named sheet with typed rows.
///
/// Columns always come from the schema `S`; only rows are held.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet<S: SheetSchema> {
    name: String,
    rows: Vec<S::Row>,
    _schema: PhantomData<S>,
}

impl<S: SheetSchema> Sheet<S> {
    /// Sheet (tab) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> Vec<SpecColumn> {
        S::columns()
    }

    /// Rows in write order.
    pub fn rows(&self) -> &[S::Row] {
        &self.rows
    }

    /// Type-erased view of this sheet.
    pub fn to_grid(&self) -> SheetGrid {
        SheetGrid {
            name: self.name.clone(),
            columns: S::columns(),
            rows: self.rows.iter().map(S::to_cells).collect(),
        }
    }
}

/// Sheet with its rows projected to cell values.
///
/// Lets sheets of different schemas share one [`Workbook`]. Only built from a [`Sheet`], so
/// every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub(crate) name: String,
    pub(crate) columns: Vec<SpecColumn>,
    pub(crate) rows: Vec<Vec<EnumCellValue>>,
}

impl SheetGrid {
    /// Sheet (tab) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[SpecColumn] {
        &self.columns
    }

    /// Row cells, each in column order.
    pub fn rows(&self) -> &[Vec<EnumCellValue>] {
        &self.rows
    }

    /// Header labels in column order.
    pub fn header_labels(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.header.as_str()).collect()
    }
}

impl<S: SheetSchema> From<Sheet<S>> for SheetGrid {
    fn from(sheet: Sheet<S>) -> Self {
        SheetGrid {
            rows: sheet.rows.iter().map(S::to_cells).collect(),
            name: sheet.name,
            columns: S::columns(),
        }
    }
}

/// Whole output document.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub(crate) name: String,
    pub(crate) sheets: Vec<SheetGrid>,
}

impl Workbook {
    /// Output identifier, used as the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sheets in tab order.
    pub fn sheets(&self) -> &[SheetGrid] {
        &self.sheets
    }
}

/// Build a sheet; the schema is inferred from the row type.
pub fn sheet<S, R>(name: impl Into<String>, rows: Vec<R>) -> Sheet<S>
where
    S: SheetSchema<Row = R>,
    R: SheetRow<Schema = S>,
{
    Sheet {
        name: name.into(),
        rows,
        _schema: PhantomData,
    }
}

/// Build a workbook. Sheet names are not checked for uniqueness.
pub fn workbook(name: impl Into<String>, sheets: Vec<SheetGrid>) -> Workbook {
    Workbook {
        name: name.into(),
        sheets,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CellType, SheetGrid, SheetSchema, sheet, workbook};
    use crate::spec::{EnumCellValue, EnumColumnKind};

    sheet_schema! {
        struct FruitColumns => FruitRow {
            name: String => "Name",
            count: i64 => "Count",
            weight: f64 => "Weight (kg)",
        }
    }

    sheet_schema! {
        struct NoteColumns => NoteRow {
            text: String => "Note",
        }
    }

    #[test]
    fn schema_columns_follow_declaration_order() {
        let l_columns = FruitColumns::columns();

        let l_keys: Vec<&str> = l_columns.iter().map(|c| c.key.as_str()).collect();
        let l_kinds: Vec<EnumColumnKind> = l_columns.iter().map(|c| c.kind).collect();

        assert_eq!(l_keys, vec!["name", "count", "weight"]);
        assert_eq!(
            l_kinds,
            vec![
                EnumColumnKind::Text,
                EnumColumnKind::Integer,
                EnumColumnKind::Decimal
            ]
        );
    }

    #[test]
    fn sheet_rows_convert_absent_fields_to_none() {
        let fruits = sheet(
            "Fruits",
            vec![
                FruitRow {
                    name: Some("Apple".to_string()),
                    count: Some(3),
                    weight: None,
                },
                FruitRow::default(),
            ],
        );

        let grid = SheetGrid::from(fruits);

        assert_eq!(grid.header_labels(), vec!["Name", "Count", "Weight (kg)"]);
        assert_eq!(
            grid.rows().to_vec(),
            vec![
                vec![
                    EnumCellValue::String("Apple".to_string()),
                    EnumCellValue::Number(3.0),
                    EnumCellValue::None,
                ],
                vec![EnumCellValue::None, EnumCellValue::None, EnumCellValue::None],
            ]
        );
    }

    #[test]
    fn to_grid_matches_conversion() {
        let fruits = sheet(
            "Fruits",
            vec![FruitRow {
                name: Some("Pear".to_string()),
                count: Some(0),
                weight: Some(0.25),
            }],
        );

        assert_eq!(fruits.to_grid(), SheetGrid::from(fruits.clone()));
    }

    #[test]
    fn workbook_keeps_sheet_order_and_accepts_mixed_schemas() {
        let fruits = sheet("Fruits", Vec::<FruitRow>::new());
        let notes = sheet(
            "Fruits",
            vec![NoteRow {
                text: Some("duplicate name is accepted".to_string()),
            }],
        );

        let book = workbook("report", vec![fruits.into(), notes.into()]);

        assert_eq!(book.name(), "report");
        assert_eq!(book.sheets().len(), 2);
        assert_eq!(book.sheets()[0].header_labels(), vec!["Name", "Count", "Weight (kg)"]);
        assert_eq!(book.sheets()[1].header_labels(), vec!["Note"]);
        assert_eq!(book.sheets()[1].name(), "Fruits");
    }

    #[test]
    fn sheet_columns_come_from_schema_and_grid_rows_match_width() {
        let fruits = sheet(
            "Fruits",
            vec![FruitRow::default(), FruitRow {
                name: Some("Fig".to_string()),
                ..Default::default()
            }],
        );

        assert_eq!(fruits.name(), "Fruits");
        assert_eq!(fruits.columns(), FruitColumns::columns());
        assert_eq!(fruits.rows().len(), 2);

        let grid = fruits.to_grid();
        assert_eq!(grid.columns(), FruitColumns::columns().as_slice());
        assert!(grid.rows().iter().all(|row| row.len() == grid.columns().len()));
    }

    #[test]
    fn integer_cells_are_exact_up_to_double_mantissa() {
        let n_exact: i64 = 1 << 53;

        assert_eq!(n_exact.to_cell(), EnumCellValue::Number(9_007_199_254_740_992.0));
        assert_eq!((-n_exact).to_cell(), EnumCellValue::Number(-9_007_199_254_740_992.0));
        assert_eq!(<u64 as CellType>::KIND, EnumColumnKind::Integer);
    }
}
