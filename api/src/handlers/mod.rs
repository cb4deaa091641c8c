//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod catalog;

pub use catalog::search_books;
