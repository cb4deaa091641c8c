//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::entities::CatalogItem;

/// "Clean Code", 45.00, 10 on hand, code CC1
pub fn clean_code() -> CatalogItem {
    CatalogItem {
        name: "Clean Code".to_string(),
        selling_price: dec!(45.00),
        quantity_on_hand: dec!(10),
        code: "CC1".to_string(),
    }
}

/// "Clean Architecture", 50.00, 3 on hand, code CA1
pub fn clean_architecture() -> CatalogItem {
    CatalogItem {
        name: "Clean Architecture".to_string(),
        selling_price: dec!(50.00),
        quantity_on_hand: dec!(3),
        code: "CA1".to_string(),
    }
}

/// Create a test item with a specific name and code
pub fn test_item(name: &str, code: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        selling_price: Decimal::ONE,
        quantity_on_hand: Decimal::ZERO,
        code: code.to_string(),
    }
}
