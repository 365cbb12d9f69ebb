//! Export port for product collections.

use crate::product::Product;

/// Persists a named export of a product collection.
///
/// Implementations live in the data layer (e.g. a spreadsheet writer).
pub trait ProductExportRepository {
    /// Failure surfaced to the caller; no partial-export recovery is expected.
    type Error;

    /// Export `products` under `name`.
    fn export(&self, name: &str, products: &[Product]) -> Result<(), Self::Error>;
}
