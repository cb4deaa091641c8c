//! PostgreSQL adapter for CatalogRepository

use async_trait::async_trait;
use sea_orm::sqlx;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, RuntimeErr};

use crate::domain::entities::CatalogItem;
use crate::domain::ports::CatalogRepository;
use crate::entity::catalog_items;
use crate::error::DomainError;

/// PostgreSQL implementation of CatalogRepository
pub struct PostgresCatalogRepository {
    db: DatabaseConnection,
}

impl PostgresCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<CatalogItem>, DomainError> {
        // The pooled connection is held only while this future runs
        let results = catalog_items::Entity::find()
            .filter(catalog_items::Column::Name.like(name_pattern(fragment)))
            .all(&self.db)
            .await
            .map_err(classify_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// `LIKE` pattern matching any name that contains `fragment`.
///
/// `%` and `_` inside the fragment keep their wildcard meaning. Backslash is
/// the default `LIKE` escape on Postgres, so it is doubled to stay literal.
fn name_pattern(fragment: &str) -> String {
    format!("%{}%", fragment.replace('\\', "\\\\"))
}

/// Sort a store failure into connectivity, data shape, or anything else
fn classify_db_err(err: DbErr) -> DomainError {
    match &err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => DomainError::Connectivity(err.to_string()),
        DbErr::Type(_) | DbErr::TryIntoErr { .. } => DomainError::DataShape(err.to_string()),
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => {
            match e {
                sqlx::Error::ColumnNotFound(_)
                | sqlx::Error::ColumnIndexOutOfBounds { .. }
                | sqlx::Error::ColumnDecode { .. }
                | sqlx::Error::Decode(_) => DomainError::DataShape(err.to_string()),
                sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed => DomainError::Connectivity(err.to_string()),
                _ => DomainError::Database(err.to_string()),
            }
        }
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<catalog_items::Model> for CatalogItem {
    fn from(model: catalog_items::Model) -> Self {
        CatalogItem {
            name: model.name,
            selling_price: model.sel_price,
            quantity_on_hand: model.all_quantity1,
            code: model.code,
        }
    }
}
