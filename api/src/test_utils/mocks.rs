//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::error::DomainError;

type ErrorFactory = Box<dyn Fn() -> DomainError + Send + Sync>;

// ============================================================================
// In-Memory Catalog Repository
// ============================================================================

/// Ordinal `str::contains` matching, insertion order as store order.
///
/// Does not emulate `LIKE`: `%`, `_` and `\` in a fragment are plain
/// characters here. Wildcard handling is covered by the Postgres adapter tests.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    items: Arc<RwLock<Vec<CatalogItem>>>,
    searches: Arc<RwLock<Vec<String>>>,
    failure: Option<ErrorFactory>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item for testing
    pub fn with_item(self, item: CatalogItem) -> Self {
        self.items.write().unwrap().push(item);
        self
    }

    /// Make every search fail with the error built by `make_error`
    pub fn failing_with<F>(mut self, make_error: F) -> Self
    where
        F: Fn() -> DomainError + Send + Sync + 'static,
    {
        self.failure = Some(Box::new(make_error));
        self
    }

    /// Fragments received so far, in call order
    pub fn searched_fragments(&self) -> Vec<String> {
        self.searches.read().unwrap().clone()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<CatalogItem>, DomainError> {
        self.searches.write().unwrap().push(fragment.to_string());

        if let Some(make_error) = &self.failure {
            return Err(make_error());
        }

        let items = self.items.read().unwrap();
        Ok(items
            .iter()
            .filter(|item| item.name.contains(fragment))
            .cloned()
            .collect())
    }
}
