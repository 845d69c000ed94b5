use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

/// Catalog entry. Not referenced by, and does not reference, any other table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servicos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub descricao: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub preco_unitario: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub custo_base: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.preco_unitario =
            MONEY.normalize("servicos.preco_unitario", active_model.preco_unitario)?;
        active_model.custo_base = MONEY.normalize_opt("servicos.custo_base", active_model.custo_base)?;
        Ok(active_model)
    }
}
