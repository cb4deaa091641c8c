//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod catalog_item_repo;


pub use catalog_item_repo::PostgresCatalogRepository;
