//! Catalog handlers
//!
//! Endpoint for searching catalog items by name.

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for searching the catalog
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Name fragment; absent or empty matches every item
    pub name: Option<String>,
}

/// A catalog item as returned to callers
///
/// Field names follow the store's column names. Decimals are written as JSON
/// numbers with their stored scale (`45.00`, not `45.0`).
#[derive(Debug, Serialize)]
pub struct CatalogItemResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "SelPrice",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub sel_price: Decimal,
    #[serde(
        rename = "AllQuantity1",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub all_quantity1: Decimal,
    #[serde(rename = "Code")]
    pub code: String,
}

impl From<CatalogItem> for CatalogItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            name: item.name,
            sel_price: item.selling_price,
            all_quantity1: item.quantity_on_hand,
            code: item.code,
        }
    }
}

/// GET /api/books/search
///
/// Items whose name contains `name`, in store order. 200 with an empty array
/// when nothing matches.
pub async fn search_books<CR>(
    State(state): State<AppState<CR>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CatalogItemResponse>>, AppError>
where
    CR: CatalogRepository + 'static,
{
    let items = state.catalog_service.search(query.name.as_deref()).await?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
