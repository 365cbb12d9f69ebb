//! Product entity and its quantity value object.

use crate::define_struct;

/// Status value marking a product as active.
pub const C_STATUS_ACTIVE: &str = "active";
/// Canonical status value for inactive products.
///
/// Any status other than [`C_STATUS_ACTIVE`] is treated as inactive.
pub const C_STATUS_INACTIVE: &str = "inactive";

define_struct! {
    /// Item count held by a product.
    pub struct Quantity(QuantityAttrs, QuantityPatch) {
        value: i64,
    }
}

define_struct! {
    /// Exportable product record.
    pub struct Product(ProductAttrs, ProductPatch) {
        /// Stable identifier.
        id: String,
        /// Display title, used as sort key in exports.
        title: String,
        /// Units in stock.
        quantity: Quantity,
        /// Free-form status; see [`C_STATUS_ACTIVE`].
        status: String,
    }
}

impl Product {
    /// Whether both records describe the same product (same `id`).
    pub fn equals(&self, other: &Product) -> bool {
        self.id == other.id
    }

    /// Whether the status is exactly [`C_STATUS_ACTIVE`].
    pub fn is_active(&self) -> bool {
        self.status == C_STATUS_ACTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::{Product, ProductAttrs, ProductPatch, Quantity, QuantityAttrs};
    use crate::structs::ValueStruct;

    fn derive_product(id: &str, title: &str, quantity: i64, status: &str) -> Product {
        Product::create(ProductAttrs {
            id: id.to_string(),
            title: title.to_string(),
            quantity: Quantity::create(QuantityAttrs { value: quantity }),
            status: status.to_string(),
        })
    }

    #[test]
    fn equals_compares_identifier_only() {
        let shoes = derive_product("1", "Shoes", 5, "active");
        let shoes_renamed = shoes.with_(ProductPatch {
            title: Some("Boots".to_string()),
            ..Default::default()
        });
        let shirt = derive_product("2", "Shoes", 5, "active");

        assert!(shoes.equals(&shoes_renamed));
        assert!(!shoes.equals(&shirt));
        assert_ne!(shoes, shoes_renamed);
    }

    #[test]
    fn only_exact_active_status_is_active() {
        assert!(derive_product("1", "A", 1, "active").is_active());
        assert!(!derive_product("2", "B", 1, "inactive").is_active());
        assert!(!derive_product("3", "C", 1, "Active").is_active());
        assert!(!derive_product("4", "D", 1, "archived").is_active());
    }

    #[test]
    fn quantity_update_leaves_original() {
        let product = derive_product("1", "Shoes", 5, "active");

        let restocked = product.with_(ProductPatch {
            quantity: Some(Quantity::create(QuantityAttrs { value: 8 })),
            ..Default::default()
        });

        assert_eq!(*product.quantity().value(), 5);
        assert_eq!(*restocked.quantity().value(), 8);
        assert_eq!(restocked.id(), "1");
    }
}
