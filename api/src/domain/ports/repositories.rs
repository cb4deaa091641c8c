//! Repository port traits
//!
//! These traits define the interface for data access.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::CatalogItem;
use crate::error::DomainError;

/// Read access to the product catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find every item whose name contains `fragment`, in store order.
    ///
    /// An empty fragment matches all items. Matching and collation belong to
    /// the backing store.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<CatalogItem>, DomainError>;
}
