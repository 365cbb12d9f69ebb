//! `tabkit_entity` v1:
//! Immutable domain entities and the collection pipeline used to export them.
//!
//! Modules:
//! - `structs`    : value-object base (`ValueStruct`, `define_struct!`)
//! - `collection` : chainable sequence pipeline
//! - `counter`    : numeric counter entity
//! - `product`    : product entity + quantity value object
//! - `repository` : export port implemented by data-layer adapters
pub mod collection;
pub mod counter;
pub mod product;
pub mod repository;
pub mod structs;

pub use collection::{Collection, collection};
pub use counter::{Counter, CounterAttrs, CounterPatch};
pub use product::{
    C_STATUS_ACTIVE, C_STATUS_INACTIVE, Product, ProductAttrs, ProductPatch, Quantity,
    QuantityAttrs, QuantityPatch,
};
pub use repository::ProductExportRepository;
pub use structs::ValueStruct;
