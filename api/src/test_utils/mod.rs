//! Test utilities
//!
//! In-memory catalog repository and catalog fixtures for unit and HTTP tests.
//! The repository is a manual double rather than a mockall mock so tests can
//! seed rows and inspect the fragments it received.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
