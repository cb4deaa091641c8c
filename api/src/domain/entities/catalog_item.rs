//! Catalog item domain entity
//!
//! A product row exposed to callers. Values are carried verbatim from the store.

use rust_decimal::Decimal;

/// A single catalog entry matched by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Display name
    pub name: String,
    /// Non-negative by convention, not enforced here
    pub selling_price: Decimal,
    /// May be fractional
    pub quantity_on_hand: Decimal,
    pub code: String,
}
