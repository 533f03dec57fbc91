//! Customer table entity

use sea_orm::entity::prelude::*;

/// Row in the `customers` table.
///
/// The email column carries a unique index (`idx_customers_email`) as the
/// authoritative backstop for the domain-level uniqueness check.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
