//! `MatCard` table
//!
//! Column names are quoted as stored, so the mixed case survives on Postgres.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "MatCard")]
pub struct Model {
    #[sea_orm(column_name = "Name", column_type = "Text")]
    pub name: String,
    #[sea_orm(column_name = "SelPrice", column_type = "Decimal(Some((18, 4)))")]
    pub sel_price: Decimal,
    #[sea_orm(column_name = "AllQuantity1", column_type = "Decimal(Some((18, 4)))")]
    pub all_quantity1: Decimal,
    // Key for the ORM mapping only; searches never look rows up by it
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "Code",
        column_type = "Text"
    )]
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
