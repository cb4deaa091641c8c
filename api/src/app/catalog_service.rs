//! Catalog service
//!
//! Substring search over the product catalog by item name.

use std::sync::Arc;

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::error::AppError;

/// Service for searching the catalog
pub struct CatalogService<CR>
where
    CR: CatalogRepository,
{
    catalog: Arc<CR>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository,
{
    pub fn new(catalog: Arc<CR>) -> Self {
        Self { catalog }
    }

    /// Search items whose name contains `fragment`
    ///
    /// An absent fragment is treated as empty and matches every item.
    /// Results keep the order the store returned them in. Store failures are
    /// passed through without retry.
    pub async fn search(&self, fragment: Option<&str>) -> Result<Vec<CatalogItem>, AppError> {
        let fragment = fragment.unwrap_or_default();

        let items = self.catalog.search_by_name(fragment).await?;

        tracing::debug!(fragment, matches = items.len(), "Catalog search");

        Ok(items)
    }
}
