//! SeaORM entities
//!
//! Table mappings for the catalog store. Domain code uses `domain::entities`.

pub mod catalog_items;
