//! Domain layer
//!
//! Catalog types and the port the store adapters implement.
//! - `entities`: `CatalogItem`
//! - `ports`: `CatalogRepository`

pub mod entities;
pub mod ports;
